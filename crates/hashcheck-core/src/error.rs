//! Error types for reading and digesting a selected file.

use std::path::PathBuf;

/// Failure to obtain the digest of a selection.
///
/// Empty, large, or non-PDF input is never an error; only the inability to
/// materialise the bytes is.
#[derive(Debug, thiserror::Error)]
pub enum HashError {
    /// The byte sequence for the selected file could not be read.
    #[error("input unavailable: {}: {source}", .path.display())]
    InputUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The blocking hash task panicked or was cancelled before finishing.
    #[error("digest task failed: {0}")]
    Join(String),
}

impl HashError {
    pub fn input_unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HashError::InputUnavailable {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, HashError>;
