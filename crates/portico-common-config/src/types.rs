//! Configuration types.

use portico_tls::{TlsBlock, TlsConfig, TlsSlot};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PorticoConfig {
    /// Gateway listeners.
    pub listeners: Vec<ListenerConfig>,
}

impl PorticoConfig {
    /// Find a listener by name.
    pub fn listener(&self, name: &str) -> Option<&ListenerConfig> {
        self.listeners.iter().find(|l| l.name == name)
    }

    /// Replace the listener with the same name. Returns false if none matched.
    pub fn replace_listener(&mut self, updated: ListenerConfig) -> bool {
        match self.listeners.iter_mut().find(|l| l.name == updated.name) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }
}

/// A gateway listener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// Unique listener name.
    pub name: String,
    /// Bind port.
    pub port: u16,
    /// Listener protocol.
    #[serde(default)]
    pub protocol: ListenerProtocol,
    /// Hostname to match, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// TLS termination settings, as stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<TlsBlock>,
}

impl ListenerConfig {
    /// Create a listener without TLS.
    pub fn new(name: impl Into<String>, port: u16, protocol: ListenerProtocol) -> Self {
        Self {
            name: name.into(),
            port,
            protocol,
            hostname: None,
            tls: None,
        }
    }
}

impl TlsSlot for ListenerConfig {
    fn name(&self) -> &str {
        &self.name
    }

    fn tls(&self) -> Option<&TlsBlock> {
        self.tls.as_ref()
    }

    fn with_tls(self, tls: TlsConfig) -> Self {
        Self {
            tls: Some(tls.into()),
            ..self
        }
    }
}

/// Listener protocols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ListenerProtocol {
    /// Plain HTTP.
    #[default]
    Http,
    /// HTTP over TLS.
    Https,
    /// Raw TCP.
    Tcp,
    /// TCP over TLS.
    Tls,
}

impl ListenerProtocol {
    /// Does the protocol terminate TLS?
    pub fn terminates_tls(&self) -> bool {
        matches!(self, Self::Https | Self::Tls)
    }
}
