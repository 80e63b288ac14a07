// Error types module

use crate::watermark::WatermarkError;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single image operation (adjustment or watermark).
///
/// The interactive session reports every variant with the same generic
/// message; the variant and its detail only go to the log.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The file could not be read from disk
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes could not be decoded as an image
    #[error("Failed to decode {path}: {message}")]
    Decode { path: PathBuf, message: String },

    /// The image could not be encoded or written back
    #[error("Failed to write {path}: {message}")]
    Encode { path: PathBuf, message: String },

    /// The output extension does not map to a format we can encode
    #[error("Unsupported output format for {0}")]
    UnsupportedFormat(PathBuf),

    /// A brightness/contrast value that is not a number
    #[error("Invalid adjustment value '{0}': expected a number between -1 and 1")]
    InvalidValue(String),

    /// Rendering or compositing the watermark failed
    #[error(transparent)]
    Watermark(#[from] WatermarkError),
}

impl ProcessingError {
    /// Short machine-friendly name of the error kind, used as a log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Read { .. } => "read",
            Self::Decode { .. } => "decode",
            Self::Encode { .. } => "encode",
            Self::UnsupportedFormat(_) => "unsupported_format",
            Self::InvalidValue(_) => "invalid_value",
            Self::Watermark(_) => "watermark",
        }
    }
}
