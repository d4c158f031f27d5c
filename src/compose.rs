//! Logo compositing.
//!
//! Draws an uploaded logo over the center of a rendered symbol, backed by
//! a solid white disc. The overlay obscures the modules underneath; the
//! symbol stays scannable as long as the error-correction margin covers
//! the obscured area.

use crate::constants::{LOGO_BACKING_SCALE, LOGO_SCALE};
use crate::models::LogoAsset;
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use tracing::debug;

/// Composites `logo` onto the center of `surface` in place.
///
/// The logo is drawn at 22% of the surface edge length over a white disc
/// of radius 0.66x the logo draw size. The function is pure with respect
/// to its inputs: identical surface, logo, and size produce identical
/// output.
pub fn overlay_logo(surface: &mut RgbaImage, logo: &LogoAsset) {
    let edge = surface.width().min(surface.height());
    let logo_size = (edge as f32 * LOGO_SCALE).round().max(1.0) as u32;
    let radius = edge as f32 * LOGO_SCALE * LOGO_BACKING_SCALE;
    let center = edge as f32 / 2.0;

    debug!(edge, logo_size, filename = %logo.filename, "compositing logo overlay");

    // White backing disc, centered on the surface
    let white = Rgba([255, 255, 255, 255]);
    let radius_sq = radius * radius;
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            if dx.mul_add(dx, dy * dy) <= radius_sq {
                surface.put_pixel(x, y, white);
            }
        }
    }

    // Logo resized to the draw size and alpha-blended over the disc
    let scaled = imageops::resize(
        &logo.image.to_rgba8(),
        logo_size,
        logo_size,
        FilterType::Triangle,
    );
    let offset = i64::from((edge - logo_size) / 2);
    imageops::overlay(surface, &scaled, offset, offset);
}
