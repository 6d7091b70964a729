//! Configuration types for Portico.
//!
//! This crate provides the gateway configuration stored in
//! `.portico/config.yaml`: listeners and their TLS settings.

pub mod env;
pub mod loader;
pub mod types;

#[cfg(test)]
mod integration_test;

pub use env::EnvError;
pub use loader::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use portico_tls::TlsDraft;

    #[test]
    fn test_default_config_is_empty() {
        let config = PorticoConfig::default();
        assert!(config.listeners.is_empty());
        assert!(config.listener("anything").is_none());
    }

    #[test]
    fn test_config_serializes_to_yaml() {
        let mut listener = ListenerConfig::new("public", 8443, ListenerProtocol::Https);
        listener.tls = Some(
            TlsDraft::new("/c.pem", "/k.pem")
                .with_cipher_suite("TLS_AES_256_GCM_SHA384")
                .build()
                .unwrap()
                .into(),
        );
        let config = PorticoConfig {
            listeners: vec![listener],
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("listeners:"));
        assert!(yaml.contains("name: public"));
        assert!(yaml.contains("protocol: HTTPS"));
        assert!(yaml.contains("cipherSuites:"));
        assert!(yaml.contains("TLS_AES_256_GCM_SHA384"));
        assert!(!yaml.contains("minTLSVersion"));
    }

    #[test]
    fn test_protocol_defaults_to_http() {
        let listener: ListenerConfig = serde_yaml::from_str("name: api\nport: 80\n").unwrap();
        assert_eq!(listener.protocol, ListenerProtocol::Http);
        assert!(listener.hostname.is_none());
        assert!(listener.tls.is_none());
    }

    #[test]
    fn test_protocol_terminates_tls() {
        assert!(ListenerProtocol::Https.terminates_tls());
        assert!(ListenerProtocol::Tls.terminates_tls());
        assert!(!ListenerProtocol::Http.terminates_tls());
        assert!(!ListenerProtocol::Tcp.terminates_tls());
    }

    #[test]
    fn test_replace_listener() {
        let mut config = PorticoConfig {
            listeners: vec![
                ListenerConfig::new("a", 80, ListenerProtocol::Http),
                ListenerConfig::new("b", 81, ListenerProtocol::Tcp),
            ],
        };

        let mut updated = ListenerConfig::new("b", 9000, ListenerProtocol::Tls);
        updated.hostname = Some("b.example.com".into());
        assert!(config.replace_listener(updated.clone()));
        assert_eq!(config.listener("b"), Some(&updated));
        assert_eq!(config.listeners[0].port, 80);

        assert!(!config.replace_listener(ListenerConfig::new("c", 1, ListenerProtocol::Http)));
        assert_eq!(config.listeners.len(), 2);
    }
}
