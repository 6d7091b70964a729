//! Listener TLS editing for Portico.
//!
//! This crate provides:
//! - The cipher-suite catalog accepted by the gateway
//! - Classification of cipher-suite selections into canonical and unsupported names
//! - Case-tolerant toggling of picker selections
//! - Assembly of an immutable [`TlsConfig`] from an editable [`TlsDraft`]
//! - An editing session over any listener that owns a TLS slot
//!
//! Nothing here touches certificate material or the network. The gateway
//! enforces the assembled configuration at runtime.
//!
//! ```
//! use portico_tls::{TlsDraft, TlsVersion};
//!
//! let mut draft = TlsDraft::new("/c.pem", "/k.pem").with_min_version(TlsVersion::Tls12);
//! draft.toggle_suite("TLS_AES_128_GCM_SHA256");
//!
//! let config = draft.build().unwrap();
//! assert_eq!(config.cipher_suites(), Some(&["TLS_AES_128_GCM_SHA256".to_string()][..]));
//! assert_eq!(config.max_tls_version(), None);
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod draft;
pub mod editor;
pub mod error;
pub mod toggle;
pub mod validate;

pub use builder::build_tls_config;
pub use config::{TlsBlock, TlsConfig, TlsVersion};
pub use draft::TlsDraft;
pub use editor::{TlsEditor, TlsSlot};
pub use error::{BuildError, ParseTlsVersionError, UnsupportedCipherSuite};
pub use toggle::toggle;
pub use validate::{validate, ValidationResult};
