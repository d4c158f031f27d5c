//! Symbol rendering.
//!
//! QR matrix generation is delegated entirely to the qrcode crate; this
//! module only selects the error-correction constant and rasterizes the
//! returned module matrix onto a pixel surface (or onto Unicode half-block
//! characters for terminal preview).

use crate::error::Result;
use crate::models::RenderOptions;
use image::RgbaImage;
use qrcode::{Color, QrCode};
use tracing::debug;

/// Renders a payload as an RGBA surface of exactly `size x size` pixels.
///
/// Each target pixel samples the nearest module (no quiet zone), so the
/// surface is edge-to-edge symbol at the requested size and colors.
///
/// # Errors
///
/// Fails when the payload exceeds the symbol capacity at the requested
/// error-correction level.
pub fn render_symbol(payload: &str, options: &RenderOptions) -> Result<RgbaImage> {
    let code = QrCode::with_error_correction_level(
        payload.as_bytes(),
        options.error_correction.to_qrcode(),
    )?;
    let modules = code.to_colors();
    let module_count = code.width();

    debug!(
        modules = module_count,
        size = options.size,
        ec = ?options.error_correction,
        "rasterizing symbol"
    );

    let fg = options.foreground.to_rgba();
    let bg = options.background.to_rgba();
    let size = options.size;

    let mut surface = RgbaImage::from_pixel(size, size, bg);
    for y in 0..size {
        let module_y = (u64::from(y) * module_count as u64 / u64::from(size)) as usize;
        for x in 0..size {
            let module_x = (u64::from(x) * module_count as u64 / u64::from(size)) as usize;
            if modules[module_y * module_count + module_x] == Color::Dark {
                surface.put_pixel(x, y, fg);
            }
        }
    }

    Ok(surface)
}

/// Renders a payload as Unicode half-block text for terminal preview.
///
/// Each character cell covers two vertically adjacent modules.
pub fn render_preview(payload: &str, options: &RenderOptions) -> Result<String> {
    let code = QrCode::with_error_correction_level(
        payload.as_bytes(),
        options.error_correction.to_qrcode(),
    )?;
    let modules = code.to_colors();
    let width = code.width();

    let mut out = String::with_capacity((width + 1) * width.div_ceil(2));
    for row in (0..width).step_by(2) {
        for col in 0..width {
            let top = modules[row * width + col] == Color::Dark;
            let bottom = row + 1 < width && modules[(row + 1) * width + col] == Color::Dark;
            out.push(match (top, bottom) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        out.push('\n');
    }

    Ok(out)
}
