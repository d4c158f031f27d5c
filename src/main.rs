//! QRCraft - Command-line QR code workshop
//!
//! Builds QR codes from URLs, free text, Wi-Fi credentials, and contact
//! cards, optionally overlaying a logo image, and exports them as PNG
//! files, terminal previews, or clipboard images.

use clap::{Parser, Subcommand};
use qrcraft::cli::{self, CliResult};
use std::process;
use tracing_subscriber::EnvFilter;

/// QRCraft - Command-line QR code workshop
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Command to run
    #[command(subcommand)]
    command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a QR code from a URL
    Url(cli::UrlArgs),
    /// Generate a QR code from free text
    Text(cli::TextArgs),
    /// Generate a Wi-Fi network QR code
    Wifi(cli::WifiArgs),
    /// Generate a contact card QR code
    Contact(cli::ContactArgs),
    /// Generate many QR codes from a JSON request file
    Batch(cli::BatchArgs),
    /// Inspect or initialize workshop defaults
    Config(cli::ConfigArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: CliResult<()> = match &cli.command {
        Command::Url(args) => args.execute(),
        Command::Text(args) => args.execute(),
        Command::Wifi(args) => args.execute(),
        Command::Contact(args) => args.execute(),
        Command::Batch(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(err) = result {
        eprintln!("{}", err.message);
        process::exit(err.exit_code as i32);
    }
}
