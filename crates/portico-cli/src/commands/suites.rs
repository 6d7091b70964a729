//! Suites command implementation.

use clap::Parser;
use portico_tls::{catalog, TlsDraft, TlsVersion};
use serde::Serialize;

use super::tls::find_listener;
use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

/// List the supported cipher suites
#[derive(Debug, Parser)]
pub struct SuitesCommand {
    /// Only list suites for this protocol version (1.2 or 1.3)
    #[arg(short = 't', long = "tls-version")]
    pub tls_version: Option<TlsVersion>,

    /// Mark the suites selected on this listener
    #[arg(short, long, value_name = "NAME")]
    pub listener: Option<String>,
}

#[derive(Debug, Serialize)]
struct SuiteGroup {
    version: TlsVersion,
    suites: &'static [&'static str],
}

#[derive(Debug, Serialize)]
struct SuitesOutput {
    groups: Vec<SuiteGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<Vec<&'static str>>,
}

impl SuitesOutput {
    fn marker(&self, suite: &str) -> &'static str {
        match &self.selected {
            None => "",
            Some(selected) if selected.iter().any(|s| *s == suite) => "[x] ",
            Some(_) => "[ ] ",
        }
    }
}

impl FormattedOutput for SuitesOutput {
    fn format_text(&self) -> String {
        self.groups
            .iter()
            .map(|group| {
                let mut block = group.version.label().to_string();
                for suite in group.suites {
                    block.push_str("\n  ");
                    block.push_str(self.marker(suite));
                    block.push_str(suite);
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl SuitesCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let draft = match &self.listener {
            Some(name) => {
                let config = ctx.load_config()?;
                Some(TlsDraft::from_listener(find_listener(&config, name)?))
            }
            None => None,
        };
        print_output(ctx, &self.listing(draft.as_ref()))
    }

    fn listing(&self, draft: Option<&TlsDraft>) -> SuitesOutput {
        let groups: Vec<SuiteGroup> = [TlsVersion::Tls13, TlsVersion::Tls12]
            .into_iter()
            .filter(|v| self.tls_version.map_or(true, |wanted| wanted == *v))
            .map(|version| SuiteGroup {
                version,
                suites: catalog::suites_for(version),
            })
            .collect();

        let selected = draft.map(|draft| {
            groups
                .iter()
                .flat_map(|group| group.suites.iter().copied())
                .filter(|suite| draft.is_selected(suite))
                .collect()
        });

        SuitesOutput { groups, selected }
    }
}
