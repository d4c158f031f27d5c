//! CLI command handlers for QRCraft.
//!
//! Each input mode is its own subcommand; all of them share the render and
//! export argument groups in `common` and funnel into the same session
//! pipeline.

pub mod batch;
pub mod common;
pub mod config;
pub mod contact;
pub mod text;
pub mod url;
pub mod wifi;

// Re-export types used by main.rs and tests
pub use batch::BatchArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use contact::ContactArgs;
pub use text::TextArgs;
pub use url::UrlArgs;
pub use wifi::WifiArgs;
