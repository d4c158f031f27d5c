//! Data models for requests, render options, and session assets.

pub mod logo;
pub mod options;
pub mod request;
pub mod rgb;

// Re-export types used throughout the crate and by tests
pub use logo::LogoAsset;
pub use options::{EcLevel, RenderOptions, RECOMMENDED_LOGO_EC};
pub use request::{ContactRequest, QrRequest, WifiRequest, WifiSecurity};
pub use rgb::RgbColor;
