//! Common test utilities for CLI testing.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

/// Test context with temporary directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("portico.yaml");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Write a config file
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(&self.config_path, config).expect("Failed to write config");
        self
    }

    /// One TLS listener and one plain listener
    pub fn with_default_config(self) -> Self {
        let config = r#"
listeners:
  - name: public
    port: 8443
    protocol: HTTPS
    tls:
      cert: /etc/portico/cert.pem
      key: /etc/portico/key.pem
      cipherSuites:
        - TLS_AES_128_GCM_SHA256
        - TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256
      minTLSVersion: TLS_V1_2
  - name: plain
    port: 8080
"#;
        self.with_config(config)
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Current contents of the config file
    pub fn read_config(&self) -> String {
        std::fs::read_to_string(&self.config_path).expect("Failed to read config")
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("portico").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("PORTICO_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("PORTICO_LOG_LEVEL")
            .env_remove("PORTICO_LOG_FILE")
            .env_remove("PORTICO_ENV");
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// JSON output assertions
pub mod json {
    use serde_json::Value;

    pub fn parse_output(output: &[u8]) -> Value {
        serde_json::from_slice(output).expect("Failed to parse JSON output")
    }
}
