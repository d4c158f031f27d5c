//! Generate command for URL payloads.

use crate::cli::common::{run_generate, CliResult, OutputArgs, RenderArgs};
use crate::models::QrRequest;
use clap::Args;

/// Generate a QR code from a URL
#[derive(Debug, Clone, Args)]
pub struct UrlArgs {
    /// The URL to encode (any non-empty string is accepted)
    #[arg(value_name = "URL")]
    pub url: String,

    /// Rendering options
    #[command(flatten)]
    pub render: RenderArgs,

    /// Export options
    #[command(flatten)]
    pub output: OutputArgs,
}

impl UrlArgs {
    /// Execute the url command
    pub fn execute(&self) -> CliResult<()> {
        let request = QrRequest::Url {
            text: self.url.clone(),
        };
        run_generate(&request, &self.render, &self.output)
    }
}
