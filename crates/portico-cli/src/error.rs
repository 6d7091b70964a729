//! CLI error handling.

use std::io;

use portico_common_config::ConfigError;
use portico_tls::BuildError;
use thiserror::Error;

use crate::Exit;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config { message: String, hint: Option<String> },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    Validation { message: String, invalid: Vec<String> },

    #[error("{resource_type} not found: {resource_name}")]
    NotFound {
        resource_type: &'static str,
        resource_name: String,
        suggestions: Vec<String>,
    },

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> Exit {
        match self {
            Self::Config { .. } => Exit::ConfigError,
            Self::Io { .. } => Exit::IoError,
            Self::Validation { .. } => Exit::ValidationError,
            Self::NotFound { .. } | Self::Output(_) => Exit::GeneralError,
        }
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Config { hint, .. } => hint.clone(),
            Self::Validation { invalid, .. } if !invalid.is_empty() => Some(
                "run `portico suites` to list supported cipher suites, or drop them with --drop-invalid"
                    .to_string(),
            ),
            Self::NotFound { suggestions, .. } if !suggestions.is_empty() => {
                Some(format!("known listeners: {}", suggestions.join(", ")))
            }
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ReadError { source } => Self::Io {
                message: format!("failed to access config: {source}"),
                source,
            },
            other => Self::Config {
                message: other.to_string(),
                hint: match &other {
                    ConfigError::EnvVarNotFound { var } => {
                        Some(format!("set {var} or give it a default with ${{{var}:-...}}"))
                    }
                    _ => None,
                },
            },
        }
    }
}

impl From<BuildError> for CliError {
    fn from(err: BuildError) -> Self {
        Self::Validation {
            message: err.to_string(),
            invalid: err.unsupported().to_vec(),
        }
    }
}
