//! Cipher-suite classification.

use crate::catalog;
use crate::error::UnsupportedCipherSuite;
use serde::Serialize;
use std::collections::HashSet;

/// Outcome of classifying a cipher-suite selection.
///
/// Both lists are deduplicated and keep the order in which each name first
/// appeared. Comparison is exact-case: `tls_aes_128_gcm_sha256` lands in
/// `invalid`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Catalog members.
    pub valid_canonical: Vec<String>,
    /// Everything else.
    pub invalid: Vec<String>,
}

impl ValidationResult {
    /// True when no unsupported name was seen.
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Is `name` among the canonical entries?
    pub fn is_selected(&self, name: &str) -> bool {
        self.valid_canonical.iter().any(|s| s == name)
    }

    /// One error per unsupported name.
    pub fn errors(&self) -> Vec<UnsupportedCipherSuite> {
        self.invalid
            .iter()
            .cloned()
            .map(UnsupportedCipherSuite)
            .collect()
    }
}

/// Classify each name as a catalog member or not.
///
/// Never fails and never touches its input. Later duplicates of a name that
/// has already been classified are dropped.
pub fn validate<S: AsRef<str>>(raw: &[S]) -> ValidationResult {
    let mut seen_valid = HashSet::new();
    let mut seen_invalid = HashSet::new();
    let mut result = ValidationResult::default();

    for name in raw.iter().map(AsRef::<str>::as_ref) {
        if catalog::is_canonical(name) {
            if seen_valid.insert(name) {
                result.valid_canonical.push(name.to_string());
            }
        } else if seen_invalid.insert(name) {
            result.invalid.push(name.to_string());
        }
    }

    result
}
