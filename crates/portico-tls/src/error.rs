//! TLS editing errors.

use thiserror::Error;

/// A cipher-suite name that is not in the catalog.
///
/// Reported per entry. It never stops the remaining entries from being
/// classified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("unsupported cipher suite: {0}")]
pub struct UnsupportedCipherSuite(pub String);

/// Errors returned when assembling a [`TlsConfig`](crate::TlsConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The draft still selects names outside the catalog. Nothing was built.
    #[error("unsupported cipher suites: {}", .0.join(", "))]
    InvalidCipherSuiteSet(Vec<String>),
}

impl BuildError {
    /// The unsupported names that blocked the build, in first-seen order.
    pub fn unsupported(&self) -> &[String] {
        match self {
            Self::InvalidCipherSuiteSet(names) => names,
        }
    }
}

/// A TLS version string that names no known version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid TLS version: {0} (expected 1.2 or 1.3)")]
pub struct ParseTlsVersionError(pub String);
