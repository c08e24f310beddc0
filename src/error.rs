//! Error types for qrcrop operations

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias using qrcrop's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrcrop operations
#[derive(Error, Debug)]
pub enum Error {
    /// Source image does not exist
    #[error("No such file: {}", .0.display())]
    NotFound(PathBuf),

    /// Source file exists but could not be decoded as an image
    #[error("Cannot decode image {}: {reason}", path.display())]
    Decode {
        /// Source path
        path: PathBuf,
        /// Decoder message
        reason: String,
    },

    /// Cropped raster could not be encoded for the requested destination
    #[error("Cannot encode image for {}: {reason}", path.display())]
    Encode {
        /// Destination path
        path: PathBuf,
        /// Encoder message
        reason: String,
    },

    /// Encoded bytes could not be written to the destination
    #[error("Cannot write {}: {source}", path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn decode(path: &Path, err: impl ToString) -> Self {
        Error::Decode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn encode(path: &Path, err: impl ToString) -> Self {
        Error::Encode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }
}
