//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use clap::{Args, Subcommand};

/// Inspect or initialize workshop defaults
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Config action to run
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Print the active configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a config file with default values
    Init,
}

impl ConfigArgs {
    /// Execute the config command
    pub fn execute(&self) -> CliResult<()> {
        match self.command {
            ConfigCommand::Show => {
                let config = Config::load()
                    .map_err(|e| CliError::io(format!("Failed to load config: {e}")))?;
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| CliError::io(format!("Failed to render config: {e}")))?;
                print!("{rendered}");
                Ok(())
            }
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| CliError::io(e.to_string()))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Init => {
                if Config::exists() {
                    return Err(CliError::validation(
                        "Configuration file already exists; edit it directly or delete it first",
                    ));
                }
                let config = Config::default();
                config
                    .save()
                    .map_err(|e| CliError::io(format!("Failed to save config: {e}")))?;

                let path = Config::config_file_path().map_err(|e| CliError::io(e.to_string()))?;
                println!("✓ Wrote default configuration to {}", path.display());
                println!("  Defaults apply to every {APP_BINARY_NAME} command; flags override them");
                Ok(())
            }
        }
    }
}
