//! Directory walking over `dataset/<user>/<gesture>/<image>`.
//!
//! Listing order is whatever `fs::read_dir` yields; nothing is sorted.

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Lazy iterator over the child directories of one directory.
pub struct Subdirectories {
    dir: PathBuf,
    entries: ReadDir,
}

impl Iterator for Subdirectories {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(Error::io(&self.dir, e))),
            };
            let path = entry.path();
            if path.is_dir() {
                return Some(Ok(path));
            }
        }
    }
}

/// Child directories of `dir`: users under the dataset root, gestures
/// under a user.
pub fn subdirectories(dir: &Path) -> Result<Subdirectories> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    Ok(Subdirectories {
        dir: dir.to_path_buf(),
        entries,
    })
}

/// Image files of a gesture folder. Every non-directory entry counts;
/// the format is left to the inference backend.
pub fn gesture_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| Error::io(dir, e))? {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_dir() {
            images.push(path);
        }
    }
    Ok(images)
}

/// Final path component as a string, as used for `id_user` and column
/// prefixes.
pub fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
