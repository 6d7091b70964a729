//! Output formatting utilities for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Trait for types that can be formatted for output
pub trait FormattedOutput: Serialize {
    fn format_text(&self) -> String;

    fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Print formatted output to stdout
pub fn print_output<T: FormattedOutput>(ctx: &CommandContext, value: &T) -> Result<(), CliError> {
    write_output(ctx.format, value, std::io::stdout().lock())
}

/// Print formatted output to a writer
pub fn write_output<T, W>(format: OutputFormat, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput,
    W: Write,
{
    let output = match format {
        OutputFormat::Text => value.format_text(),
        OutputFormat::Json => value.format_json()?,
    };

    writeln!(writer, "{}", output).map_err(|source| CliError::Io {
        message: format!("failed to write output: {source}"),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        message: &'static str,
    }

    impl FormattedOutput for Greeting {
        fn format_text(&self) -> String {
            self.message.to_string()
        }
    }

    #[test]
    fn test_write_text_and_json() {
        let value = Greeting { message: "hello" };

        let mut text = Vec::new();
        write_output(OutputFormat::Text, &value, &mut text).unwrap();
        assert_eq!(String::from_utf8(text).unwrap(), "hello\n");

        let mut json = Vec::new();
        write_output(OutputFormat::Json, &value, &mut json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(parsed["message"], "hello");
    }
}
