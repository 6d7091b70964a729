//! Listener TLS commands.

use clap::{Args, Subcommand, ValueEnum};
use portico_common_config::{ListenerConfig, PorticoConfig};
use portico_tls::{catalog, TlsBlock, TlsDraft, TlsEditor, TlsVersion};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};

/// Show or edit a listener's TLS settings
#[derive(Debug, Subcommand)]
pub enum TlsCommand {
    /// Print a listener's TLS settings
    Show(ShowArgs),

    /// Edit a listener's TLS settings and save the config file
    Set(SetArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Listener name
    pub listener: String,
}

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Listener name
    pub listener: String,

    /// Certificate file path
    #[arg(long)]
    pub cert: Option<String>,

    /// Private key file path
    #[arg(long)]
    pub key: Option<String>,

    /// Client CA root path (empty to disable client certificates)
    #[arg(long)]
    pub root: Option<String>,

    /// Drop every selected cipher suite before adding new ones
    #[arg(long)]
    pub clear_suites: bool,

    /// Remove a selected cipher suite, ignoring case
    #[arg(long = "remove-suite", value_name = "NAME")]
    pub remove_suites: Vec<String>,

    /// Remove an unsupported entry, matched exactly (catalog names are kept)
    #[arg(long = "remove-invalid", value_name = "NAME")]
    pub remove_invalid: Vec<String>,

    /// Remove every unsupported entry
    #[arg(long)]
    pub drop_invalid: bool,

    /// Append a cipher suite as entered
    #[arg(long = "suite", value_name = "NAME")]
    pub suites: Vec<String>,

    /// Select or deselect a cipher suite, spelled as listed by `portico suites`
    #[arg(long = "toggle-suite", value_name = "NAME")]
    pub toggle_suites: Vec<String>,

    /// Minimum TLS version
    #[arg(long, value_enum)]
    pub min_version: Option<VersionChoice>,

    /// Maximum TLS version
    #[arg(long, value_enum)]
    pub max_version: Option<VersionChoice>,
}

/// Version picker value. `default` leaves the bound to the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VersionChoice {
    Default,
    #[value(name = "1.2")]
    V12,
    #[value(name = "1.3")]
    V13,
}

impl VersionChoice {
    fn version(self) -> Option<TlsVersion> {
        match self {
            Self::Default => None,
            Self::V12 => Some(TlsVersion::Tls12),
            Self::V13 => Some(TlsVersion::Tls13),
        }
    }
}

#[derive(Debug, Serialize)]
struct TlsOutput {
    listener: String,
    tls: Option<TlsBlock>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unsupported: Vec<String>,
}

impl TlsOutput {
    fn new(listener: &ListenerConfig) -> Self {
        let unsupported = TlsDraft::from_listener(listener)
            .unsupported()
            .into_iter()
            .map(|entry| entry.0)
            .collect();

        Self {
            listener: listener.name.clone(),
            tls: listener.tls.clone(),
            unsupported,
        }
    }
}

fn version_label(version: Option<TlsVersion>) -> &'static str {
    version.map_or("default", |v| v.label())
}

impl FormattedOutput for TlsOutput {
    fn format_text(&self) -> String {
        let Some(tls) = &self.tls else {
            return format!("listener {}: TLS not configured", self.listener);
        };

        let suites = match &tls.cipher_suites {
            Some(suites) if !suites.is_empty() => suites.join(", "),
            _ => "gateway defaults".to_string(),
        };

        let mut lines = vec![
            format!("listener:      {}", self.listener),
            format!("cert:          {}", tls.cert),
            format!("key:           {}", tls.key),
            format!("root:          {}", tls.root.as_deref().unwrap_or("none")),
            format!("cipher suites: {suites}"),
            format!("min version:   {}", version_label(tls.min_tls_version)),
            format!("max version:   {}", version_label(tls.max_tls_version)),
        ];
        if !self.unsupported.is_empty() {
            lines.push(format!(
                "unsupported:   {} (remove with --drop-invalid)",
                self.unsupported.join(", ")
            ));
        }
        lines.join("\n")
    }
}

impl TlsCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        match self {
            Self::Show(args) => {
                let config = ctx.load_config()?;
                let listener = find_listener(&config, &args.listener)?;
                print_output(ctx, &TlsOutput::new(listener))
            }
            Self::Set(args) => args.execute(ctx),
        }
    }
}

impl SetArgs {
    fn execute(&self, ctx: &CommandContext) -> Result<(), CliError> {
        let mut config = ctx.load_config()?;
        let listener = find_listener(&config, &self.listener)?.clone();

        let mut editor = TlsEditor::open(listener);
        self.apply(editor.draft_mut());

        editor.save(|updated| {
            config.replace_listener(updated);
        })?;
        ctx.save_config(&config)?;
        info!(
            listener = %self.listener,
            path = %ctx.loader.path().display(),
            "Updated listener TLS settings"
        );

        print_output(ctx, &TlsOutput::new(find_listener(&config, &self.listener)?))
    }

    /// Clearing and `--remove-suite` run before additions so a suite can be
    /// replaced in one call. Unsupported entries are removed last, so they
    /// also catch names added by `--suite`.
    fn apply(&self, draft: &mut TlsDraft) {
        if let Some(cert) = &self.cert {
            draft.cert_file = cert.clone();
        }
        if let Some(key) = &self.key {
            draft.key_file = key.clone();
        }
        if let Some(root) = &self.root {
            draft.root_file = root.clone();
        }

        if self.clear_suites {
            draft.clear_suites();
        }
        for name in &self.remove_suites {
            draft.remove_suite(name);
        }
        draft.cipher_suites.extend(self.suites.iter().cloned());
        for name in &self.toggle_suites {
            draft.toggle_suite(catalog::canonicalize(name).unwrap_or(name));
        }
        for name in &self.remove_invalid {
            draft.remove_invalid(name);
        }
        if self.drop_invalid {
            draft.remove_all_invalid();
        }

        if let Some(choice) = self.min_version {
            draft.min_version = choice.version();
        }
        if let Some(choice) = self.max_version {
            draft.max_version = choice.version();
        }

        debug!(suites = ?draft.cipher_suites, "Applied TLS edits");
    }
}

pub(super) fn find_listener<'a>(config: &'a PorticoConfig, name: &str) -> Result<&'a ListenerConfig, CliError> {
    config.listener(name).ok_or_else(|| CliError::NotFound {
        resource_type: "listener",
        resource_name: name.to_string(),
        suggestions: config.listeners.iter().map(|l| l.name.clone()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use portico_common_config::ListenerProtocol;

    #[derive(Debug, Parser)]
    struct Harness {
        #[command(flatten)]
        args: SetArgs,
    }

    fn parse(argv: &[&str]) -> SetArgs {
        Harness::parse_from(std::iter::once("set").chain(argv.iter().copied())).args
    }

    #[test]
    fn test_version_choice_default_clears_bound() {
        let mut draft = TlsDraft::new("/c.pem", "/k.pem")
            .with_min_version(TlsVersion::Tls12)
            .with_max_version(TlsVersion::Tls12);

        parse(&["public", "--min-version", "default", "--max-version", "1.3"]).apply(&mut draft);
        assert_eq!(draft.min_version, None);
        assert_eq!(draft.max_version, Some(TlsVersion::Tls13));
    }

    #[test]
    fn test_apply_order() {
        let mut draft = TlsDraft::new("/c.pem", "/k.pem").with_cipher_suites([
            "TLS_AES_128_GCM_SHA256",
            "rc4",
            "tls_aes_256_gcm_sha384",
        ]);

        parse(&[
            "public",
            "--root",
            "/ca.pem",
            "--remove-suite",
            "TLS_AES_256_GCM_SHA384",
            "--drop-invalid",
            "--suite",
            "TLS_CHACHA20_POLY1305_SHA256",
            "--toggle-suite",
            "TLS_AES_128_GCM_SHA256",
        ])
        .apply(&mut draft);

        assert_eq!(draft.root_file, "/ca.pem");
        assert_eq!(draft.cipher_suites, vec!["TLS_CHACHA20_POLY1305_SHA256"]);
        assert!(draft.build().is_ok());
    }

    #[test]
    fn test_clear_suites_then_select() {
        let mut draft = TlsDraft::new("/c.pem", "/k.pem").with_cipher_suite("bogus");
        parse(&["public", "--clear-suites", "--toggle-suite", "tls_aes_128_gcm_sha256"])
            .apply(&mut draft);
        assert_eq!(draft.cipher_suites, vec!["TLS_AES_128_GCM_SHA256"]);
    }

    #[test]
    fn test_show_text_without_tls() {
        let output = TlsOutput {
            listener: "plain".into(),
            tls: None,
            unsupported: Vec::new(),
        };
        assert_eq!(output.format_text(), "listener plain: TLS not configured");
    }

    #[test]
    fn test_show_text_with_defaults() {
        let output = TlsOutput {
            listener: "public".into(),
            tls: Some(TlsDraft::new("/c.pem", "/k.pem").build().unwrap().into()),
            unsupported: Vec::new(),
        };
        let text = output.format_text();
        assert!(text.contains("root:          none"));
        assert!(text.contains("cipher suites: gateway defaults"));
        assert!(text.contains("min version:   default"));
        assert!(!text.contains("unsupported"));
    }

    #[test]
    fn test_show_lists_stored_unsupported_suites() {
        let mut listener = ListenerConfig::new("public", 443, ListenerProtocol::Https);
        listener.tls = Some(TlsBlock {
            cert: "/c.pem".into(),
            key: "/k.pem".into(),
            root: None,
            cipher_suites: Some(vec![
                "TLS_RSA_WITH_AES_128_CBC_SHA".into(),
                "TLS_AES_128_GCM_SHA256".into(),
            ]),
            min_tls_version: None,
            max_tls_version: None,
        });

        let output = TlsOutput::new(&listener);
        assert_eq!(output.unsupported, vec!["TLS_RSA_WITH_AES_128_CBC_SHA"]);
        assert!(output
            .format_text()
            .contains("unsupported:   TLS_RSA_WITH_AES_128_CBC_SHA (remove with --drop-invalid)"));
    }

    #[test]
    fn test_drop_invalid_catches_added_suites() {
        let mut draft = TlsDraft::new("/c.pem", "/k.pem").with_cipher_suite("TLS_AES_128_GCM_SHA256");
        parse(&["public", "--suite", "bogus", "--drop-invalid"]).apply(&mut draft);
        assert_eq!(draft.cipher_suites, vec!["TLS_AES_128_GCM_SHA256"]);
        assert!(draft.build().is_ok());
    }

    #[test]
    fn test_remove_invalid_keeps_selected_catalog_suite() {
        let mut draft = TlsDraft::new("/c.pem", "/k.pem").with_cipher_suites([
            "TLS_AES_128_GCM_SHA256",
            "bogus",
        ]);
        parse(&[
            "public",
            "--remove-invalid",
            "TLS_AES_128_GCM_SHA256",
            "--remove-invalid",
            "bogus",
        ])
        .apply(&mut draft);
        assert_eq!(draft.cipher_suites, vec!["TLS_AES_128_GCM_SHA256"]);
    }
}
