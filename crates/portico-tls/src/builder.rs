//! TLS configuration builder.

use crate::config::TlsConfig;
use crate::draft::TlsDraft;
use crate::error::BuildError;
use crate::validate::{validate, ValidationResult};
use tracing::{debug, warn};

/// Build a [`TlsConfig`] from a draft.
///
/// Fails with [`BuildError::InvalidCipherSuiteSet`] while the draft selects any
/// name outside the catalog; nothing is assembled and the draft is left as is.
/// Otherwise cert and key are copied verbatim, the root is kept only when
/// non-empty, the cipher suites only when at least one canonical name remains,
/// and each version bound only when set.
///
/// Version bounds are not checked against each other. A minimum above the
/// maximum is logged and passed through.
pub fn build_tls_config(draft: &TlsDraft) -> Result<TlsConfig, BuildError> {
    let ValidationResult {
        valid_canonical,
        invalid,
    } = validate(&draft.cipher_suites);

    if !invalid.is_empty() {
        debug!(?invalid, "Refusing to build TLS config with unsupported cipher suites");
        return Err(BuildError::InvalidCipherSuiteSet(invalid));
    }

    if let (Some(min), Some(max)) = (draft.min_version, draft.max_version) {
        if min > max {
            warn!(%min, %max, "Minimum TLS version is above the maximum");
        }
    }

    let config = TlsConfig {
        cert: draft.cert_file.clone(),
        key: draft.key_file.clone(),
        root: Some(draft.root_file.clone()).filter(|root| !root.is_empty()),
        cipher_suites: Some(valid_canonical).filter(|suites| !suites.is_empty()),
        min_tls_version: draft.min_version,
        max_tls_version: draft.max_version,
    };

    debug!(
        cipher_suites = config.cipher_suites.as_ref().map_or(0, Vec::len),
        client_auth = config.root.is_some(),
        "Built TLS config"
    );
    Ok(config)
}
