//! Logo asset handling.

use crate::error::{Result, WorkshopError};
use image::DynamicImage;
use std::path::Path;

/// A decoded logo image together with its source filename.
///
/// Created on upload, replaced by a newer upload, destroyed on removal.
/// Any format the image decoder understands is accepted; no size or type
/// allow-list is enforced.
#[derive(Debug, Clone)]
pub struct LogoAsset {
    /// Decoded image data
    pub image: DynamicImage,
    /// Source filename (not the full path)
    pub filename: String,
}

impl LogoAsset {
    /// Creates a logo asset from an already decoded image.
    #[must_use]
    pub fn new(image: DynamicImage, filename: impl Into<String>) -> Self {
        Self {
            image,
            filename: filename.into(),
        }
    }

    /// Loads and decodes a logo asset from a file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::LogoLoad`] when the file cannot be read or
    /// decoded as an image.
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|source| WorkshopError::LogoLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let filename = path
            .file_name()
            .map_or_else(|| "logo".to_string(), |n| n.to_string_lossy().to_string());

        Ok(Self { image, filename })
    }
}
