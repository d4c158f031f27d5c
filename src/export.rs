//! Artifact export: PNG serialization, file save, and clipboard copy.
//!
//! Clipboard access goes through [`ClipboardProvider`] so the failure paths
//! can be exercised without a windowing system; the production
//! implementation is backed by the arboard crate.

use crate::error::{Result, WorkshopError};
use image::RgbaImage;
use std::borrow::Cow;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// Serializes a surface to PNG bytes.
pub fn encode_png(surface: &RgbaImage) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    surface
        .write_to(&mut cursor, image::ImageFormat::Png)
        .map_err(WorkshopError::Png)?;
    Ok(cursor.into_inner())
}

/// Writes a surface to `path` as a PNG file.
pub fn save_png(surface: &RgbaImage, path: &Path) -> Result<()> {
    let bytes = encode_png(surface)?;
    fs::write(path, bytes).map_err(|source| WorkshopError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "wrote PNG export");
    Ok(())
}

/// Clipboard image access, abstracted for testability.
pub trait ClipboardProvider {
    /// Places an RGBA image on the system clipboard.
    ///
    /// `rgba` holds `width * height * 4` bytes in row-major order.
    fn set_image(&mut self, width: usize, height: usize, rgba: &[u8]) -> Result<()>;
}

/// System clipboard implementation using the arboard crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_image(&mut self, width: usize, height: usize, rgba: &[u8]) -> Result<()> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(WorkshopError::ClipboardUnavailable)?;

        let data = arboard::ImageData {
            width,
            height,
            bytes: Cow::Borrowed(rgba),
        };
        clipboard
            .set_image(data)
            .map_err(WorkshopError::ClipboardUnavailable)
    }
}

/// Copies a surface to the clipboard as an image.
pub fn copy_to_clipboard(provider: &mut dyn ClipboardProvider, surface: &RgbaImage) -> Result<()> {
    provider.set_image(
        surface.width() as usize,
        surface.height() as usize,
        surface.as_raw(),
    )
}
