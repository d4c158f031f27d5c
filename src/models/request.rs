//! Structured input requests for the four QR input modes.
//!
//! Exactly one input mode is active per generation; the mode determines
//! which fields are read and which payload rule applies. The same models
//! drive the CLI flags and the JSON batch file format.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Wi-Fi network security type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum WifiSecurity {
    /// WPA / WPA2 / WPA3 personal
    #[default]
    Wpa,
    /// Legacy WEP
    Wep,
    /// Open network (no password)
    None,
}

impl WifiSecurity {
    /// Wire value emitted in the Wi-Fi configuration payload's `T:` field.
    #[must_use]
    pub const fn wire_value(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::None => "nopass",
        }
    }
}

/// Wi-Fi credential input.
///
/// Invariant: `ssid` must be non-empty after trimming. The password may be
/// empty and is used verbatim (it is not trimmed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiRequest {
    /// Network name (SSID)
    pub ssid: String,
    /// Network password, verbatim; may be empty
    #[serde(default)]
    pub password: String,
    /// Security type
    #[serde(default)]
    pub security: WifiSecurity,
    /// Whether the network broadcasts a hidden SSID
    #[serde(default)]
    pub hidden: bool,
}

/// Contact card input.
///
/// Invariant: at least one of `first_name` / `last_name` must be non-empty
/// after trimming. All other fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Phone number
    #[serde(default)]
    pub phone: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Organization name
    #[serde(default)]
    pub organization: String,
    /// Website URL
    #[serde(default)]
    pub website: String,
}

/// A structured generation request, tagged by input mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QrRequest {
    /// A URL; any non-empty string is accepted, no scheme validation
    Url {
        /// The URL text
        text: String,
    },
    /// Free-form text
    Text {
        /// The text to encode
        text: String,
    },
    /// Wi-Fi network credentials
    Wifi(WifiRequest),
    /// Contact card
    Contact(ContactRequest),
}

impl QrRequest {
    /// Human-readable mode label, used in status output.
    #[must_use]
    pub const fn mode_label(&self) -> &'static str {
        match self {
            Self::Url { .. } => "URL",
            Self::Text { .. } => "Plain Text",
            Self::Wifi(_) => "Wi-Fi",
            Self::Contact(_) => "Contact Card",
        }
    }
}
