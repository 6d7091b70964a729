//! Configuration file loading and parsing.

use crate::types::PorticoConfig;
use portico_tls::validate;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Default config location relative to the project directory.
pub const DEFAULT_CONFIG_PATH: &str = ".portico/config.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },

    #[error("invalid substitution pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Configuration loader.
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Create a loader for `.portico/config.yaml` under the given project directory.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            config_path: project_dir.as_ref().join(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a loader for an explicit config file.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    /// Path of the config file this loader reads and writes.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load the configuration. A missing file yields an empty configuration.
    pub fn load(&self) -> Result<PorticoConfig, ConfigError> {
        if !self.config_path.exists() {
            debug!(path = %self.config_path.display(), "No config file, using defaults");
            return Ok(PorticoConfig::default());
        }

        let contents = std::fs::read_to_string(&self.config_path)?;
        let expanded = self.expand_env_vars(&contents)?;

        let config: PorticoConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        self.validate(&config)?;
        debug!(
            path = %self.config_path.display(),
            listeners = config.listeners.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
    fn expand_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let mut result = content.to_string();
        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let default = cap.get(2).map(|m| m.as_str());

            let value = match std::env::var(var_name) {
                Ok(v) => v,
                Err(_) => match default {
                    Some(d) => d.to_string(),
                    None => {
                        return Err(ConfigError::EnvVarNotFound {
                            var: var_name.to_string(),
                        })
                    }
                },
            };

            result = result.replace(&cap[0], &value);
        }

        Ok(result)
    }

    /// Validate configuration values.
    fn validate(&self, config: &PorticoConfig) -> Result<(), ConfigError> {
        let mut names = HashSet::new();

        for listener in &config.listeners {
            if listener.name.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "listener name must not be empty".to_string(),
                });
            }

            if !names.insert(listener.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("duplicate listener name: {}", listener.name),
                });
            }

            if listener.port == 0 {
                return Err(ConfigError::ValidationError {
                    message: format!("listener {} port must be greater than 0", listener.name),
                });
            }

            let Some(tls) = &listener.tls else {
                continue;
            };

            if !listener.protocol.terminates_tls() {
                warn!(
                    listener = %listener.name,
                    protocol = ?listener.protocol,
                    "Listener has TLS settings but its protocol does not terminate TLS"
                );
            }

            let stored = tls.cipher_suites.as_deref().unwrap_or_default();
            let unsupported = validate(stored).invalid;
            if !unsupported.is_empty() {
                warn!(
                    listener = %listener.name,
                    ?unsupported,
                    "Listener TLS block names unsupported cipher suites"
                );
            }
        }

        Ok(())
    }

    /// Save configuration to file.
    pub fn save(&self, config: &PorticoConfig) -> Result<(), ConfigError> {
        if let Some(config_dir) = self.config_path.parent() {
            std::fs::create_dir_all(config_dir)?;
        }

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(&self.config_path, yaml)?;
        debug!(path = %self.config_path.display(), "Saved config");
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}
