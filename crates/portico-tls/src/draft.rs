//! Editable TLS state.

use crate::builder::build_tls_config;
use crate::catalog;
use crate::config::{TlsBlock, TlsConfig, TlsVersion};
use crate::editor::TlsSlot;
use crate::error::{BuildError, UnsupportedCipherSuite};
use crate::toggle::toggle;
use crate::validate::{validate, ValidationResult};
use serde::{Deserialize, Serialize};

/// In-progress TLS settings for one listener.
///
/// An empty `root_file` means no client CA. `cipher_suites` holds raw input
/// in insertion order and may contain unsupported or duplicated names until
/// the draft is built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TlsDraft {
    /// Certificate file path.
    pub cert_file: String,
    /// Private key file path.
    pub key_file: String,
    /// Client CA root path.
    pub root_file: String,
    /// Selected cipher suites, as entered.
    pub cipher_suites: Vec<String>,
    /// Minimum TLS version.
    pub min_version: Option<TlsVersion>,
    /// Maximum TLS version.
    pub max_version: Option<TlsVersion>,
}

impl TlsDraft {
    /// Create a draft with a certificate and key.
    pub fn new(cert_file: impl Into<String>, key_file: impl Into<String>) -> Self {
        Self {
            cert_file: cert_file.into(),
            key_file: key_file.into(),
            ..Default::default()
        }
    }

    /// Seed a draft from a listener. A listener without TLS yields an empty
    /// draft; stored suites are kept as they are, supported or not.
    pub fn from_listener<L: TlsSlot>(listener: &L) -> Self {
        listener.tls().map(Self::from).unwrap_or_default()
    }

    /// Set the client CA root.
    pub fn with_root(mut self, root_file: impl Into<String>) -> Self {
        self.root_file = root_file.into();
        self
    }

    /// Append a cipher suite as entered.
    pub fn with_cipher_suite(mut self, suite: impl Into<String>) -> Self {
        self.cipher_suites.push(suite.into());
        self
    }

    /// Replace the cipher-suite selection.
    pub fn with_cipher_suites(mut self, suites: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.cipher_suites = suites.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum TLS version.
    pub fn with_min_version(mut self, version: TlsVersion) -> Self {
        self.min_version = Some(version);
        self
    }

    /// Set the maximum TLS version.
    pub fn with_max_version(mut self, version: TlsVersion) -> Self {
        self.max_version = Some(version);
        self
    }

    /// Classify the current selection.
    pub fn validation(&self) -> ValidationResult {
        validate(&self.cipher_suites)
    }

    /// Unsupported entries of the current selection.
    pub fn unsupported(&self) -> Vec<UnsupportedCipherSuite> {
        self.validation().errors()
    }

    /// Is the catalog entry `name` part of the valid selection?
    pub fn is_selected(&self, name: &str) -> bool {
        self.validation().is_selected(name)
    }

    /// Toggle a catalog entry picked from a browsing control.
    pub fn toggle_suite(&mut self, candidate: &str) {
        self.cipher_suites = toggle(&self.cipher_suites, candidate);
    }

    /// Remove a selected catalog entry, whatever case it was stored in.
    pub fn remove_suite(&mut self, name: &str) {
        let needle = name.to_uppercase();
        self.cipher_suites.retain(|s| s.to_uppercase() != needle);
    }

    /// Remove an unsupported entry. Only exact matches are removed, and a
    /// catalog name is never treated as unsupported.
    pub fn remove_invalid(&mut self, name: &str) {
        if catalog::is_canonical(name) {
            return;
        }
        self.cipher_suites.retain(|s| s != name);
    }

    /// Remove every unsupported entry.
    pub fn remove_all_invalid(&mut self) {
        self.cipher_suites.retain(|s| catalog::is_canonical(s));
    }

    /// Drop the whole selection, falling back to the provider defaults.
    pub fn clear_suites(&mut self) {
        self.cipher_suites.clear();
    }

    /// Assemble a [`TlsConfig`]. See [`build_tls_config`].
    pub fn build(&self) -> Result<TlsConfig, BuildError> {
        build_tls_config(self)
    }
}

impl From<&TlsConfig> for TlsDraft {
    fn from(config: &TlsConfig) -> Self {
        Self {
            cert_file: config.cert.clone(),
            key_file: config.key.clone(),
            root_file: config.root.clone().unwrap_or_default(),
            cipher_suites: config.cipher_suites.clone().unwrap_or_default(),
            min_version: config.min_tls_version,
            max_version: config.max_tls_version,
        }
    }
}

impl From<&TlsBlock> for TlsDraft {
    fn from(block: &TlsBlock) -> Self {
        Self {
            cert_file: block.cert.clone(),
            key_file: block.key.clone(),
            root_file: block.root.clone().unwrap_or_default(),
            cipher_suites: block.cipher_suites.clone().unwrap_or_default(),
            min_version: block.min_tls_version,
            max_version: block.max_tls_version,
        }
    }
}
