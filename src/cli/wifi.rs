//! Generate command for Wi-Fi network payloads.

use crate::cli::common::{run_generate, CliResult, OutputArgs, RenderArgs};
use crate::models::{QrRequest, WifiRequest, WifiSecurity};
use clap::Args;

/// Generate a Wi-Fi network QR code
#[derive(Debug, Clone, Args)]
pub struct WifiArgs {
    /// Network name (SSID)
    #[arg(long, value_name = "SSID")]
    pub ssid: String,

    /// Network password (omit for open networks)
    #[arg(long, value_name = "PASSWORD", default_value = "")]
    pub password: String,

    /// Security type
    #[arg(long, value_enum, default_value_t = WifiSecurity::Wpa)]
    pub security: WifiSecurity,

    /// Mark the network as hidden
    #[arg(long)]
    pub hidden: bool,

    /// Rendering options
    #[command(flatten)]
    pub render: RenderArgs,

    /// Export options
    #[command(flatten)]
    pub output: OutputArgs,
}

impl WifiArgs {
    /// Execute the wifi command
    pub fn execute(&self) -> CliResult<()> {
        let request = QrRequest::Wifi(WifiRequest {
            ssid: self.ssid.clone(),
            password: self.password.clone(),
            security: self.security,
            hidden: self.hidden,
        });
        run_generate(&request, &self.render, &self.output)
    }
}
