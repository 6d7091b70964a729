//! Command implementations.

mod suites;
mod tls;
mod validate;

pub use suites::SuitesCommand;
pub use tls::TlsCommand;
pub use validate::ValidateCommand;
