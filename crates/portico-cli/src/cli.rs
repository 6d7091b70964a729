//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use portico_common_config::{env, ConfigLoader, PorticoConfig};

use crate::commands::{SuitesCommand, TlsCommand, ValidateCommand};
use crate::error::CliError;

/// Portico - gateway listener TLS settings
///
/// Inspect the supported cipher suites and edit the TLS block of listeners
/// stored in `.portico/config.yaml`.
#[derive(Debug, Parser)]
#[command(
    name = "portico",
    author,
    version,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase verbosity level"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(
        short,
        long,
        global = true,
        value_hint = ValueHint::FilePath,
        help = "Path to configuration file [env: PORTICO_CONFIG]"
    )]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        value_enum,
        help = "Output format (text, json)"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the supported cipher suites
    Suites(SuitesCommand),

    /// Check cipher suite names against the supported set
    Validate(ValidateCommand),

    /// Show or edit a listener's TLS settings
    #[command(subcommand)]
    Tls(TlsCommand),
}

impl Command {
    /// Execute the selected command
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        match self {
            Self::Suites(cmd) => cmd.execute(ctx),
            Self::Validate(cmd) => cmd.execute(ctx),
            Self::Tls(cmd) => cmd.execute(ctx),
        }
    }
}

impl Cli {
    /// Resolve the config file: `--config`, then `PORTICO_CONFIG`, then
    /// `.portico/config.yaml` under the working directory.
    pub fn context(&self) -> CommandContext {
        let loader = match self.config.clone().or_else(env::config_path) {
            Some(path) => ConfigLoader::from_file(path),
            None => ConfigLoader::default(),
        };

        CommandContext {
            loader,
            format: self.format,
        }
    }
}

/// Context passed to all commands
pub struct CommandContext {
    pub loader: ConfigLoader,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load the gateway configuration.
    pub fn load_config(&self) -> Result<PorticoConfig, CliError> {
        self.loader.load().map_err(CliError::from)
    }

    /// Persist the gateway configuration.
    pub fn save_config(&self, config: &PorticoConfig) -> Result<(), CliError> {
        self.loader.save(config).map_err(CliError::from)
    }
}
