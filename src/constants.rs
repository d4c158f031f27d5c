//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the logo compositing geometry.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "QRCraft";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "qrcraft";

/// Default filename for exported QR code images.
pub const EXPORT_FILENAME: &str = "qrcraft-code.png";

/// Logo draw size as a fraction of the symbol edge length.
pub const LOGO_SCALE: f32 = 0.22;

/// Backing disc radius as a fraction of the logo draw size.
pub const LOGO_BACKING_SCALE: f32 = 0.66;
