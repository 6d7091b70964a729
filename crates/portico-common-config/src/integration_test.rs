use std::fs;
use tempfile::tempdir;

use portico_tls::{TlsEditor, TlsVersion};

use super::*;

#[test]
fn test_edit_listener_tls_and_persist() {
    let dir = tempdir().unwrap();
    let portico_dir = dir.path().join(".portico");
    fs::create_dir_all(&portico_dir).unwrap();

    let config_content = r#"
listeners:
  - name: public
    port: 443
    protocol: HTTPS
    tls:
      cert: /old/cert.pem
      key: /old/key.pem
      root: /old/ca.pem
      cipherSuites: [TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256]
  - name: internal
    port: 9000
    protocol: TCP
"#;
    fs::write(portico_dir.join("config.yaml"), config_content).unwrap();

    let loader = ConfigLoader::new(dir.path());
    let mut config = loader.load().unwrap();

    let listener = config.listener("public").unwrap().clone();
    let mut editor = TlsEditor::open(listener);
    {
        let draft = editor.draft_mut();
        assert_eq!(draft.root_file, "/old/ca.pem");
        draft.cert_file = "/new/cert.pem".into();
        draft.root_file.clear();
        draft.toggle_suite("TLS_ECDHE_RSA_WITH_AES_128_GCM_SHA256");
        draft.toggle_suite("TLS_AES_256_GCM_SHA384");
        draft.min_version = Some(TlsVersion::Tls13);
    }

    let mut replaced = false;
    editor
        .save(|updated| replaced = config.replace_listener(updated))
        .unwrap();
    assert!(replaced);

    loader.save(&config).unwrap();
    let reloaded = loader.load().unwrap();

    let tls = reloaded.listener("public").unwrap().tls.as_ref().unwrap();
    assert_eq!(tls.cert, "/new/cert.pem");
    assert_eq!(tls.key, "/old/key.pem");
    assert_eq!(tls.root, None);
    assert_eq!(
        tls.cipher_suites,
        Some(vec!["TLS_AES_256_GCM_SHA384".to_string()])
    );
    assert_eq!(tls.min_tls_version, Some(TlsVersion::Tls13));
    assert_eq!(tls.max_tls_version, None);

    let internal = reloaded.listener("internal").unwrap();
    assert_eq!(internal.protocol, ListenerProtocol::Tcp);
    assert!(internal.tls.is_none());
}

#[test]
fn test_cancelled_edit_leaves_config_unchanged() {
    let config = PorticoConfig {
        listeners: vec![ListenerConfig::new("public", 443, ListenerProtocol::Https)],
    };
    let before = config.clone();

    let mut editor = TlsEditor::open(config.listeners[0].clone());
    editor.draft_mut().cert_file = "/c.pem".into();
    editor.cancel(|| {});

    assert_eq!(config, before);
}

#[test]
fn test_stale_suite_is_dropped_and_other_listeners_untouched() {
    let dir = tempdir().unwrap();
    let loader = ConfigLoader::from_file(dir.path().join("gateway.yaml"));
    fs::write(
        loader.path(),
        r#"
listeners:
  - name: public
    port: 443
    protocol: HTTPS
    tls:
      cert: /c.pem
      key: /k.pem
      cipherSuites: [TLS_RSA_WITH_AES_128_CBC_SHA, TLS_AES_128_GCM_SHA256]
  - name: legacy
    port: 8443
    protocol: TLS
    tls:
      cert: /l.pem
      key: /l.key
      cipherSuites: [TLS_RSA_WITH_RC4_128_SHA]
"#,
    )
    .unwrap();

    let mut config = loader.load().unwrap();
    let mut editor = TlsEditor::open(config.listener("public").unwrap().clone());
    assert!(!editor.can_save());
    editor.draft_mut().remove_all_invalid();
    editor
        .save(|updated| {
            config.replace_listener(updated);
        })
        .unwrap();
    loader.save(&config).unwrap();

    let reloaded = loader.load().unwrap();
    let public = reloaded.listener("public").unwrap().tls.as_ref().unwrap();
    assert_eq!(
        public.cipher_suites,
        Some(vec!["TLS_AES_128_GCM_SHA256".to_string()])
    );
    let legacy = reloaded.listener("legacy").unwrap().tls.as_ref().unwrap();
    assert_eq!(
        legacy.cipher_suites,
        Some(vec!["TLS_RSA_WITH_RC4_128_SHA".to_string()])
    );
}
