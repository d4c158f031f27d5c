//! Generate command for free-text payloads.

use crate::cli::common::{run_generate, CliResult, OutputArgs, RenderArgs};
use crate::models::QrRequest;
use clap::Args;

/// Generate a QR code from free text
#[derive(Debug, Clone, Args)]
pub struct TextArgs {
    /// The text to encode
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Rendering options
    #[command(flatten)]
    pub render: RenderArgs,

    /// Export options
    #[command(flatten)]
    pub output: OutputArgs,
}

impl TextArgs {
    /// Execute the text command
    pub fn execute(&self) -> CliResult<()> {
        let request = QrRequest::Text {
            text: self.text.clone(),
        };
        run_generate(&request, &self.render, &self.output)
    }
}
