//! Per-gesture analysis: image count, static/dynamic type, action label
//! and the joined model descriptions.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::catalog;
use crate::dataset;
use crate::describer::Describer;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Zero or one image.
    Static,
    /// More than one image.
    Dynamic,
}

impl GestureKind {
    pub fn from_count(count: usize) -> Self {
        if count > 1 {
            Self::Dynamic
        } else {
            Self::Static
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Static => "estático",
            Self::Dynamic => "dinâmico",
        }
    }
}

impl fmt::Display for GestureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GestureAnnotation {
    /// Folder name, used as column prefix.
    pub gesture: String,
    pub kind: GestureKind,
    pub num: usize,
    /// Empty when the folder name is not in the gesture table.
    pub label: String,
    pub description: String,
}

/// Analyzes one gesture folder, calling `describer` once per image in
/// listing order.
pub fn analyze_gesture<D>(dir: &Path, describer: &mut D) -> Result<GestureAnnotation>
where
    D: Describer + ?Sized,
{
    let images = dataset::gesture_images(dir)?;
    let gesture = dataset::dir_name(dir);

    let mut description = String::new();
    for image in &images {
        description.push_str(&describer.describe(image)?);
        description.push(' ');
    }
    let description = description.trim_end().to_string();

    let label = catalog::action_label(&gesture).unwrap_or_default().to_string();
    debug!(%gesture, images = images.len(), %label, "gesture analyzed");

    Ok(GestureAnnotation {
        kind: GestureKind::from_count(images.len()),
        num: images.len(),
        gesture,
        label,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    /// Describes an image by its file contents and records call order.
    #[derive(Default)]
    struct ContentsDescriber {
        calls: Vec<PathBuf>,
    }

    impl Describer for ContentsDescriber {
        fn describe(&mut self, image: &Path) -> Result<String> {
            self.calls.push(image.to_path_buf());
            Ok(fs::read_to_string(image).unwrap())
        }
    }

    #[test]
    fn kind_threshold() {
        assert_eq!(GestureKind::from_count(0), GestureKind::Static);
        assert_eq!(GestureKind::from_count(1), GestureKind::Static);
        assert_eq!(GestureKind::from_count(2), GestureKind::Dynamic);
        assert_eq!(GestureKind::from_count(30), GestureKind::Dynamic);
        assert_eq!(GestureKind::Dynamic.to_string(), "dinâmico");
        assert_eq!(GestureKind::Static.to_string(), "estático");
    }

    #[test]
    fn single_image_gesture() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("c3");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("0.jpg"), "pinch").unwrap();

        let mut describer = ContentsDescriber::default();
        let annotation = analyze_gesture(&dir, &mut describer).unwrap();
        assert_eq!(
            annotation,
            GestureAnnotation {
                gesture: "c3".into(),
                kind: GestureKind::Static,
                num: 1,
                label: "mute_mic".into(),
                description: "pinch".into(),
            }
        );
    }

    #[test]
    fn descriptions_follow_describer_call_order() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("c1");
        fs::create_dir(&dir).unwrap();
        for name in ["a.jpg", "b.jpg", "c.jpg"] {
            fs::write(dir.join(name), name.trim_end_matches(".jpg")).unwrap();
        }

        let mut describer = ContentsDescriber::default();
        let annotation = analyze_gesture(&dir, &mut describer).unwrap();

        let expected: Vec<String> = describer
            .calls
            .iter()
            .map(|p| fs::read_to_string(p).unwrap())
            .collect();
        assert_eq!(annotation.description, expected.join(" "));
        assert_eq!(annotation.num, 3);
        assert_eq!(annotation.kind, GestureKind::Dynamic);
        assert_eq!(annotation.label, "increase_volume");
    }

    #[test]
    fn empty_gesture_is_static_with_no_description() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("c8");
        fs::create_dir(&dir).unwrap();

        let mut describer = ContentsDescriber::default();
        let annotation = analyze_gesture(&dir, &mut describer).unwrap();
        assert_eq!(annotation.num, 0);
        assert_eq!(annotation.kind, GestureKind::Static);
        assert_eq!(annotation.description, "");
        assert_eq!(annotation.label, "end_call");
        assert!(describer.calls.is_empty());
    }

    #[test]
    fn trailing_whitespace_is_trimmed_but_inner_kept() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("c9");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("0.jpg"), "  open palm \n").unwrap();

        let mut describer = ContentsDescriber::default();
        let annotation = analyze_gesture(&dir, &mut describer).unwrap();
        assert_eq!(annotation.description, "  open palm");
        assert_eq!(annotation.label, "");
    }
}
