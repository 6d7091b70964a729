//! Validate command implementation.

use clap::Parser;
use portico_tls::{catalog, validate, ValidationResult};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

/// Check cipher suite names against the supported set
#[derive(Debug, Parser)]
pub struct ValidateCommand {
    /// Cipher suite names, as they would be entered
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}

impl FormattedOutput for ValidationResult {
    fn format_text(&self) -> String {
        let mut lines = Vec::new();
        for name in &self.valid_canonical {
            lines.push(format!("ok       {name}"));
        }
        for name in &self.invalid {
            match catalog::canonicalize(name) {
                Some(canonical) => {
                    lines.push(format!("invalid  {name} (did you mean {canonical}?)"))
                }
                None => lines.push(format!("invalid  {name}")),
            }
        }
        lines.join("\n")
    }
}

impl ValidateCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let result = validate(&self.names);
        print_output(ctx, &result)?;

        if result.is_valid() {
            return Ok(());
        }

        Err(CliError::Validation {
            message: format!("{} unsupported cipher suite(s)", result.invalid.len()),
            invalid: result.invalid,
        })
    }
}
