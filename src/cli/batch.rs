//! Batch command: generate many QR codes from a JSON request file.
//!
//! The file format mirrors the single-shot modes: each item is a tagged
//! request with optional per-item render options.
//!
//! ```json
//! {
//!   "items": [
//!     { "type": "url", "text": "https://example.com" },
//!     { "type": "wifi", "ssid": "Home", "password": "secret",
//!       "options": { "size": 512, "error_correction": "H" } }
//!   ]
//! }
//! ```

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::{QrRequest, RenderOptions};
use crate::session::QrSession;
use clap::Args;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// One entry in a batch request file.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchItem {
    /// The request, tagged by input mode
    #[serde(flatten)]
    pub request: QrRequest,
    /// Per-item render options; config defaults apply when omitted
    #[serde(default)]
    pub options: Option<RenderOptions>,
}

/// A batch request file.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchFile {
    /// Requests to generate, in output order
    pub items: Vec<BatchItem>,
}

/// Generate many QR codes from a JSON request file
#[derive(Debug, Clone, Args)]
pub struct BatchArgs {
    /// Path to the JSON request file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output directory for generated PNG files
    #[arg(short, long, value_name = "DIR", default_value = "qrcraft-batch")]
    pub out_dir: PathBuf,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self) -> CliResult<()> {
        let content = fs::read_to_string(&self.file)
            .map_err(|e| CliError::io(format!("Failed to read batch file: {e}")))?;
        let batch: BatchFile = serde_json::from_str(&content)
            .map_err(|e| CliError::validation(format!("Failed to parse batch file: {e}")))?;

        if batch.items.is_empty() {
            return Err(CliError::validation("Batch file contains no items"));
        }

        let config = Config::load().unwrap_or_default();

        fs::create_dir_all(&self.out_dir)
            .map_err(|e| CliError::io(format!("Failed to create output directory: {e}")))?;

        let mut session = QrSession::new();
        for (index, item) in batch.items.iter().enumerate() {
            let options = item.options.unwrap_or(config.render);

            let item_context = |err: CliError| CliError {
                exit_code: err.exit_code,
                message: format!("Item {}: {}", index + 1, err.message),
            };

            session
                .generate(&item.request, &options)
                .map_err(|e| item_context(e.into()))?;

            let path = self.out_dir.join(format!("qrcraft-{:03}.png", index + 1));
            session.save_png(&path).map_err(|e| item_context(e.into()))?;

            println!("✓ {} ({})", path.display(), item.request.mode_label());
        }

        println!(
            "✓ Generated {} files in {}",
            batch.items.len(),
            self.out_dir.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EcLevel, WifiSecurity};

    #[test]
    fn test_batch_file_parses_mixed_items() {
        let json = r#"{
            "items": [
                { "type": "url", "text": "https://example.com" },
                { "type": "wifi", "ssid": "Home", "security": "wep",
                  "options": { "size": 512, "error_correction": "H" } },
                { "type": "contact", "first_name": "Ada" }
            ]
        }"#;

        let batch: BatchFile = serde_json::from_str(json).unwrap();
        assert_eq!(batch.items.len(), 3);

        assert!(batch.items[0].options.is_none());
        match &batch.items[1].request {
            QrRequest::Wifi(wifi) => {
                assert_eq!(wifi.ssid, "Home");
                assert_eq!(wifi.security, WifiSecurity::Wep);
            }
            other => panic!("expected wifi request, got {other:?}"),
        }
        let options = batch.items[1].options.unwrap();
        assert_eq!(options.size, 512);
        assert_eq!(options.error_correction, EcLevel::H);
    }

    #[test]
    fn test_batch_file_rejects_unknown_mode() {
        let json = r#"{ "items": [ { "type": "barcode", "text": "x" } ] }"#;
        assert!(serde_json::from_str::<BatchFile>(json).is_err());
    }
}
