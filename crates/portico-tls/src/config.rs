//! TLS configuration types.

use crate::builder::build_tls_config;
use crate::draft::TlsDraft;
use crate::error::{BuildError, ParseTlsVersionError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TLS protocol version.
///
/// "No bound" is expressed as `Option::None` wherever a version is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TlsVersion {
    /// TLS 1.2.
    #[serde(rename = "TLS_V1_2", alias = "TLS_1_2", alias = "1.2")]
    Tls12,
    /// TLS 1.3.
    #[serde(rename = "TLS_V1_3", alias = "TLS_1_3", alias = "1.3")]
    Tls13,
}

impl TlsVersion {
    /// Every version, oldest first.
    pub const ALL: [TlsVersion; 2] = [TlsVersion::Tls12, TlsVersion::Tls13];

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tls12 => "TLS_V1_2",
            Self::Tls13 => "TLS_V1_3",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tls12 => "TLS 1.2",
            Self::Tls13 => "TLS 1.3",
        }
    }
}

impl fmt::Display for TlsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TlsVersion {
    type Err = ParseTlsVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TLS_V1_2" | "TLS_1_2" | "TLS1.2" | "TLS 1.2" | "1.2" => Ok(Self::Tls12),
            "TLS_V1_3" | "TLS_1_3" | "TLS1.3" | "TLS 1.3" | "1.3" => Ok(Self::Tls13),
            _ => Err(ParseTlsVersionError(s.to_string())),
        }
    }
}

/// TLS configuration attached to a listener.
///
/// Only [`build_tls_config`] produces values of this type, so every cipher
/// suite it carries is a catalog member and appears once. Optional fields that
/// were empty or unset in the draft are absent here and skipped when
/// serialized. Deserialization runs through the same builder, so input naming
/// an unsupported suite is rejected; read stored listener state as a
/// [`TlsBlock`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TlsBlock")]
pub struct TlsConfig {
    pub(crate) cert: String,
    pub(crate) key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) root: Option<String>,
    #[serde(rename = "cipherSuites", skip_serializing_if = "Option::is_none")]
    pub(crate) cipher_suites: Option<Vec<String>>,
    #[serde(rename = "minTLSVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) min_tls_version: Option<TlsVersion>,
    #[serde(rename = "maxTLSVersion", skip_serializing_if = "Option::is_none")]
    pub(crate) max_tls_version: Option<TlsVersion>,
}

impl TlsConfig {
    /// Certificate file path.
    pub fn cert(&self) -> &str {
        &self.cert
    }

    /// Private key file path.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Client CA root path. When set, the gateway requires client certificates.
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Allowed cipher suites. `None` means the provider's default list.
    pub fn cipher_suites(&self) -> Option<&[String]> {
        self.cipher_suites.as_deref()
    }

    /// Minimum TLS version.
    pub fn min_tls_version(&self) -> Option<TlsVersion> {
        self.min_tls_version
    }

    /// Maximum TLS version.
    pub fn max_tls_version(&self) -> Option<TlsVersion> {
        self.max_tls_version
    }
}

/// A TLS block as persisted on a listener.
///
/// Uses the same wire names as [`TlsConfig`] but carries no guarantees: a
/// stored block may still name suites the catalog no longer lists. Seed a
/// [`TlsDraft`] from it to surface those entries and remove them before
/// building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsBlock {
    /// Certificate file path.
    pub cert: String,
    /// Private key file path.
    pub key: String,
    /// Client CA root path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Cipher suites as stored.
    #[serde(default, rename = "cipherSuites", skip_serializing_if = "Option::is_none")]
    pub cipher_suites: Option<Vec<String>>,
    /// Minimum TLS version.
    #[serde(default, rename = "minTLSVersion", skip_serializing_if = "Option::is_none")]
    pub min_tls_version: Option<TlsVersion>,
    /// Maximum TLS version.
    #[serde(default, rename = "maxTLSVersion", skip_serializing_if = "Option::is_none")]
    pub max_tls_version: Option<TlsVersion>,
}

impl From<TlsConfig> for TlsBlock {
    fn from(config: TlsConfig) -> Self {
        Self {
            cert: config.cert,
            key: config.key,
            root: config.root,
            cipher_suites: config.cipher_suites,
            min_tls_version: config.min_tls_version,
            max_tls_version: config.max_tls_version,
        }
    }
}

impl TryFrom<TlsBlock> for TlsConfig {
    type Error = BuildError;

    fn try_from(block: TlsBlock) -> Result<Self, Self::Error> {
        build_tls_config(&TlsDraft::from(&block))
    }
}
