//! Error types for the generation and export pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the workshop pipeline.
///
/// All of these are recoverable: callers report them as a notice and leave
/// any previously generated artifact untouched.
#[derive(Debug, Error)]
pub enum WorkshopError {
    /// A required field was missing after trimming whitespace.
    #[error("{0}")]
    EmptyInput(&'static str),

    /// Regenerate or export was attempted before any successful generation.
    #[error("Generate a QR code first")]
    NoArtifact,

    /// The system clipboard rejected the image write.
    #[error("Could not copy to clipboard - try saving to a file instead")]
    ClipboardUnavailable(#[source] arboard::Error),

    /// The payload does not fit a QR symbol at the requested error-correction level.
    #[error("payload cannot be encoded as a QR symbol: {0:?}")]
    Encode(#[from] qrcode::types::QrError),

    /// The logo image could not be read or decoded.
    #[error("Failed to load logo image: {path}")]
    LogoLoad {
        /// Path the logo was loaded from
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: image::ImageError,
    },

    /// Writing an exported file failed.
    #[error("Failed to write {path}")]
    Io {
        /// Path of the failed write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serializing the surface as PNG failed.
    #[error("Failed to encode PNG")]
    Png(#[source] image::ImageError),
}

/// Result alias for workshop operations.
pub type Result<T> = std::result::Result<T, WorkshopError>;
