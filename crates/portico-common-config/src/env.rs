//! Environment variable handling.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable errors.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("failed to load .env file: {0}")]
    DotenvError(#[from] dotenvy::Error),
}

/// Environment variable names.
pub mod vars {
    /// Config file override.
    pub const PORTICO_CONFIG: &str = "PORTICO_CONFIG";
    /// Deployment environment, selects `.env.<name>`.
    pub const PORTICO_ENV: &str = "PORTICO_ENV";
}

/// Load `.env`, `.env.local` and `.env.$PORTICO_ENV` from the working directory.
///
/// Missing files are skipped; variables already set win over file values.
pub fn init() -> Result<(), EnvError> {
    for file in [".env", ".env.local"] {
        load_optional(file)?;
    }

    if let Ok(name) = env::var(vars::PORTICO_ENV) {
        load_optional(&format!(".env.{}", name))?;
    }

    Ok(())
}

/// Config file override from `PORTICO_CONFIG`.
pub fn config_path() -> Option<PathBuf> {
    env::var(vars::PORTICO_CONFIG)
        .ok()
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

fn load_optional(file: &str) -> Result<(), EnvError> {
    match dotenvy::from_filename(file) {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e.into()),
    }
}
