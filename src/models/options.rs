//! Rendering options handed to the symbol renderer.

use crate::models::RgbColor;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// QR error-correction level, ordered by increasing redundancy.
///
/// `L` trades redundancy for capacity; `H` trades capacity for redundancy.
/// The ordering makes "at least Q" style comparisons work directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum, Default,
)]
pub enum EcLevel {
    /// ~7% of codewords recoverable
    L,
    /// ~15% of codewords recoverable
    #[default]
    M,
    /// ~25% of codewords recoverable
    Q,
    /// ~30% of codewords recoverable
    H,
}

impl EcLevel {
    /// Maps the level to the renderer's error-correction constant.
    ///
    /// The constant is supplied opaquely to the external renderer; no
    /// error-correction math happens in this crate.
    #[must_use]
    pub const fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            Self::L => qrcode::EcLevel::L,
            Self::M => qrcode::EcLevel::M,
            Self::Q => qrcode::EcLevel::Q,
            Self::H => qrcode::EcLevel::H,
        }
    }
}

/// Minimum error-correction level recommended when a logo overlay is present.
///
/// The overlay obscures modules at the symbol center; scannability then
/// depends on the error-correction margin. The level is recommended, not
/// enforced: the user's requested level is always honored.
pub const RECOMMENDED_LOGO_EC: EcLevel = EcLevel::H;

/// Options supplied to the symbol renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Edge length of the rendered symbol in pixels
    #[serde(default = "default_size")]
    pub size: u32,
    /// Module (foreground) color
    #[serde(default = "default_foreground")]
    pub foreground: RgbColor,
    /// Background color
    #[serde(default = "default_background")]
    pub background: RgbColor,
    /// Error-correction level
    #[serde(default)]
    pub error_correction: EcLevel,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: default_size(),
            foreground: default_foreground(),
            background: default_background(),
            error_correction: EcLevel::default(),
        }
    }
}

fn default_size() -> u32 {
    256
}

fn default_foreground() -> RgbColor {
    RgbColor::new(0, 0, 0)
}

fn default_background() -> RgbColor {
    RgbColor::new(255, 255, 255)
}
