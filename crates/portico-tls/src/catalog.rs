//! Cipher suites accepted by the gateway.
//!
//! These names must stay in lock-step with the gateway's cipher-suite
//! allowlist and with the `TLSConfig.CipherSuite` enumeration of the resource
//! protocol. A name listed here that the gateway cannot parse makes saves fail
//! downstream; a name missing here can never be selected.

use crate::config::TlsVersion;

/// TLS 1.3 cipher suites.
pub const TLS13_CIPHER_SUITES: [&str; 3] = [
    "TLS_AES_256_GCM_SHA384",
    "TLS_AES_128_GCM_SHA256",
    "TLS_CHACHA20_POLY1305_SHA256",
];

/// TLS 1.2 cipher suites.
pub const TLS12_CIPHER_SUITES: [&str; 6] = [
    "TLS_ECDHE_ECDSA_WITH_AES_256_GCM_SHA384",
    "TLS_ECDHE_ECDSA_WITH_AES_128_GCM_SHA256",
    "TLS_ECDHE_ECDSA_WITH_CHACHA20_POLY1305_SHA256",
    "TLS_ECDHE_RSA_WITH_AES_256_GCM_SHA384",
    "TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256",
    "TLS_ECDHE_RSA_WITH_CHACHA20_POLY1305_SHA256",
];

/// Every supported cipher suite, TLS 1.3 partition first.
pub const ALL_CIPHER_SUITES: [&str; 9] = [
    TLS13_CIPHER_SUITES[0],
    TLS13_CIPHER_SUITES[1],
    TLS13_CIPHER_SUITES[2],
    TLS12_CIPHER_SUITES[0],
    TLS12_CIPHER_SUITES[1],
    TLS12_CIPHER_SUITES[2],
    TLS12_CIPHER_SUITES[3],
    TLS12_CIPHER_SUITES[4],
    TLS12_CIPHER_SUITES[5],
];

/// Is `name` spelled exactly as a catalog entry?
pub fn is_canonical(name: &str) -> bool {
    ALL_CIPHER_SUITES.contains(&name)
}

/// The catalog partition for a protocol version.
pub fn suites_for(version: TlsVersion) -> &'static [&'static str] {
    match version {
        TlsVersion::Tls12 => &TLS12_CIPHER_SUITES,
        TlsVersion::Tls13 => &TLS13_CIPHER_SUITES,
    }
}

/// The protocol version whose partition contains `name` (exact case).
pub fn version_of(name: &str) -> Option<TlsVersion> {
    TlsVersion::ALL
        .into_iter()
        .find(|version| suites_for(*version).contains(&name))
}

/// Look up the catalog spelling of `name`, ignoring case.
pub fn canonicalize(name: &str) -> Option<&'static str> {
    let upper = name.to_uppercase();
    ALL_CIPHER_SUITES.into_iter().find(|suite| *suite == upper)
}
