//! Shared CLI plumbing: errors, exit codes, and the common generate flow.

use crate::config::Config;
use crate::error::WorkshopError;
use crate::export::SystemClipboard;
use crate::models::{EcLevel, LogoAsset, QrRequest, RenderOptions, RgbColor, RECOMMENDED_LOGO_EC};
use crate::render;
use crate::session::QrSession;
use clap::Args;
use std::path::PathBuf;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input failed validation
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
    /// The environment refused an operation (e.g. clipboard access)
    EnvironmentError = 3,
}

/// Error type for CLI command execution.
#[derive(Debug)]
pub struct CliError {
    /// Exit code to terminate the process with
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Creates an environment error (exit code 3).
    pub fn environment(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::EnvironmentError,
            message: message.into(),
        }
    }
}

impl From<WorkshopError> for CliError {
    fn from(err: WorkshopError) -> Self {
        match &err {
            WorkshopError::EmptyInput(_)
            | WorkshopError::NoArtifact
            | WorkshopError::Encode(_) => Self::validation(err.to_string()),
            WorkshopError::ClipboardUnavailable(_) => Self::environment(err.to_string()),
            WorkshopError::LogoLoad { .. }
            | WorkshopError::Io { .. }
            | WorkshopError::Png(_) => Self::io(err.to_string()),
        }
    }
}

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Rendering options shared by all generate commands.
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Symbol edge length in pixels
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..=8192))]
    pub size: Option<u32>,

    /// Foreground (module) color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub fg: Option<String>,

    /// Background color as #RRGGBB
    #[arg(long, value_name = "HEX")]
    pub bg: Option<String>,

    /// Error-correction level
    #[arg(long, value_name = "LEVEL", value_enum)]
    pub ec: Option<EcLevel>,

    /// Overlay a logo image at the center of the symbol
    #[arg(long, value_name = "FILE")]
    pub logo: Option<PathBuf>,
}

impl RenderArgs {
    /// Resolves CLI flags over config defaults into concrete render options.
    pub fn resolve(&self, config: &Config) -> CliResult<RenderOptions> {
        let mut options = config.render;

        if let Some(size) = self.size {
            options.size = size;
        }
        if let Some(fg) = &self.fg {
            options.foreground =
                RgbColor::from_hex(fg).map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(bg) = &self.bg {
            options.background =
                RgbColor::from_hex(bg).map_err(|e| CliError::validation(e.to_string()))?;
        }
        if let Some(ec) = self.ec {
            options.error_correction = ec;
        }

        Ok(options)
    }
}

/// Export options shared by all generate commands.
#[derive(Debug, Clone, Args)]
pub struct OutputArgs {
    /// Output PNG path (defaults to qrcraft-code.png)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy the result to the system clipboard as an image
    #[arg(long)]
    pub copy: bool,

    /// Print a Unicode preview of the symbol to stdout
    #[arg(long)]
    pub preview: bool,
}

/// Runs the full pipeline for one request: encode, render, composite, and
/// export per the requested outputs.
pub fn run_generate(
    request: &QrRequest,
    render_args: &RenderArgs,
    output_args: &OutputArgs,
) -> CliResult<()> {
    let config = Config::load().unwrap_or_default();
    let options = render_args.resolve(&config)?;

    let mut session = QrSession::new();
    if let Some(path) = &render_args.logo {
        session.set_logo(LogoAsset::load(path)?);
        if options.error_correction < RECOMMENDED_LOGO_EC {
            eprintln!("Tip: logo overlays scan best with a high error-correction level; consider --ec h");
        }
    }

    session.generate(request, &options)?;
    println!(
        "✓ Generated {} QR code ({}x{} px)",
        request.mode_label(),
        options.size,
        options.size
    );

    if output_args.preview {
        if let Some(artifact) = session.artifact() {
            let preview = render::render_preview(&artifact.payload, &artifact.options)?;
            print!("{preview}");
        }
    }

    let output = output_args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.export.filename));
    session.save_png(&output)?;
    println!("✓ Saved {}", output.display());

    if output_args.copy {
        let mut clipboard = SystemClipboard;
        session.copy_to_clipboard(&mut clipboard)?;
        println!("✓ Copied to clipboard");
    }

    Ok(())
}
