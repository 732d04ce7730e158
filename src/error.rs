//! Error types for the annotation run

use std::path::PathBuf;

use thiserror::Error;

/// Every failure here is fatal to the run. Unmapped gesture names and
/// empty gesture folders are not errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The inference server answered with a non-2xx status.
    #[error("inference API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
