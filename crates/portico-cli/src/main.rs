//! Portico CLI - listener TLS settings editor
//!
//! Main entry point for the `portico` binary.

use std::process::ExitCode;

use clap::Parser;
use portico_common_log::{LogConfig, LogLevel};
use tracing::debug;

mod cli;
mod commands;
mod error;
mod output;

use cli::Cli;
use error::CliError;

/// Application exit codes
#[repr(u8)]
pub enum Exit {
    Success = 0,
    GeneralError = 1,
    ConfigError = 2,
    IoError = 3,
    ValidationError = 5,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(&cli);

    match run(cli) {
        Ok(()) => Exit::Success.into(),
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("  hint: {hint}");
            }
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    portico_common_config::env::init().map_err(|e| CliError::Config {
        message: e.to_string(),
        hint: None,
    })?;

    let ctx = cli.context();
    debug!(config = %ctx.loader.path().display(), "Resolved config path");
    cli.command.execute(&ctx)
}

fn init_tracing(cli: &Cli) {
    let mut config = LogConfig::from_env();
    if cli.verbose > 0 || cli.quiet {
        config.level = LogLevel::from_verbosity(cli.verbose, cli.quiet);
    }
    config.source_location |= cli.verbose >= 3;

    if let Err(e) = portico_common_log::init(config) {
        eprintln!("warning: {e}");
    }
}
