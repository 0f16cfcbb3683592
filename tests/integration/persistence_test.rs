//! Save/reload cycle tests.

use homelink_config::{CertificatePin, ConnectionConfig};

use crate::{sample_config, uri};

#[test]
fn test_roundtrip_through_string() {
    let config = sample_config();

    let saved = config.to_json_string().expect("encode should succeed");
    let restored = ConnectionConfig::from_json_str(&saved).expect("decode should succeed");

    assert_eq!(restored.home_server_uri(), config.home_server_uri());
    assert_eq!(restored.identity_server_uri(), config.identity_server_uri());
    assert_eq!(restored.credentials(), config.credentials());
    assert_eq!(restored.certificate_pins(), config.certificate_pins());
}

#[test]
fn test_roundtrip_preserves_duplicate_pins_in_order() {
    let pins = vec![
        CertificatePin::new("a.com", "h1"),
        CertificatePin::new("b.com", "h2"),
        CertificatePin::new("a.com", "h3"),
    ];
    let config = ConnectionConfig::builder()
        .home_server(uri("https://chat.example.org"))
        .certificate_pins(pins.clone())
        .build()
        .unwrap();

    let json = config.to_json().unwrap();
    assert_eq!(json["certificate_pins"].as_array().unwrap().len(), 3);

    let restored = ConnectionConfig::from_json(&json).unwrap();
    assert_eq!(restored.certificate_pins(), pins.as_slice());
}

// Encoding materializes the effective identity URL, so a configuration that
// never set one comes back with it set explicitly. The effective value is
// unchanged, and a second round trip reproduces the document exactly.
#[test]
fn test_roundtrip_is_stable_after_first_encode() {
    let config = ConnectionConfig::new(uri("https://chat.example.org")).unwrap();

    let first = config.to_json().unwrap();
    let restored = ConnectionConfig::from_json(&first).unwrap();
    let second = restored.to_json().unwrap();

    assert_eq!(restored.identity_server_uri(), config.identity_server_uri());
    assert_eq!(first, second);
}

#[test]
fn test_reload_of_minimal_legacy_document() {
    // Documents written before identity servers and pinning existed carry
    // only the home server URL.
    let restored =
        ConnectionConfig::from_json_str(r#"{"home_server_url": "https://chat.example.org"}"#)
            .unwrap();

    assert_eq!(
        restored.home_server_uri().as_str(),
        "https://chat.example.org"
    );
    assert_eq!(restored.identity_server_uri(), restored.home_server_uri());
    assert!(restored.credentials().is_none());
    assert!(restored.certificate_pins().is_empty());
    assert!(!restored.should_pin());
    assert!(restored.allowed_fingerprints().is_empty());
}

#[test]
fn test_reload_normalizes_trailing_slashes() {
    let restored = ConnectionConfig::from_json_str(
        r#"{
            "home_server_url": "https://chat.example.org/",
            "identity_server_url": "https://id.example.org/"
        }"#,
    )
    .unwrap();

    assert_eq!(
        restored.home_server_uri().as_str(),
        "https://chat.example.org"
    );
    assert_eq!(
        restored.identity_server_uri().as_str(),
        "https://id.example.org"
    );
}

#[test]
fn test_reload_rejects_truncated_document() {
    assert!(ConnectionConfig::from_json_str(r#"{"home_server_url":"#).is_err());
}

#[test]
fn test_credentials_with_optional_fields_survive() {
    let config = sample_config();
    let restored = ConnectionConfig::from_json(&config.to_json().unwrap()).unwrap();

    let creds = restored.credentials().expect("credentials should survive");
    assert_eq!(creds.device_id(), Some("GHTYAJCE"));
    assert_eq!(creds.refresh_token(), None);
}
