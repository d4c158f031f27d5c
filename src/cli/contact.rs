//! Generate command for contact-card payloads.

use crate::cli::common::{run_generate, CliResult, OutputArgs, RenderArgs};
use crate::models::{ContactRequest, QrRequest};
use clap::Args;

/// Generate a contact card QR code
#[derive(Debug, Clone, Args)]
pub struct ContactArgs {
    /// First name (at least one of --first/--last is required)
    #[arg(long, value_name = "NAME", default_value = "")]
    pub first: String,

    /// Last name
    #[arg(long, value_name = "NAME", default_value = "")]
    pub last: String,

    /// Phone number
    #[arg(long, value_name = "PHONE", default_value = "")]
    pub phone: String,

    /// Email address
    #[arg(long, value_name = "EMAIL", default_value = "")]
    pub email: String,

    /// Organization name
    #[arg(long, value_name = "ORG", default_value = "")]
    pub org: String,

    /// Website URL
    #[arg(long, value_name = "URL", default_value = "")]
    pub website: String,

    /// Rendering options
    #[command(flatten)]
    pub render: RenderArgs,

    /// Export options
    #[command(flatten)]
    pub output: OutputArgs,
}

impl ContactArgs {
    /// Execute the contact command
    pub fn execute(&self) -> CliResult<()> {
        let request = QrRequest::Contact(ContactRequest {
            first_name: self.first.clone(),
            last_name: self.last.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            organization: self.org.clone(),
            website: self.website.clone(),
        });
        run_generate(&request, &self.render, &self.output)
    }
}
