//! Wire-format stability tests.
//!
//! The persisted key names are fixed identifiers; these tests assert the
//! document against the constants so an accidental rename fails loudly.

use homelink_config::constants::{
    CERTIFICATE_PINS_KEY, CREDENTIALS_KEY, HOME_SERVER_URL_KEY, IDENTITY_SERVER_URL_KEY,
    PIN_HOSTNAME_KEY, PIN_PUBLIC_HASH_KEY,
};
use homelink_config::ConnectionConfig;

use crate::{sample_config, uri};

#[test]
fn test_full_document_key_set() {
    let json = sample_config().to_json().unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), 4);
    assert!(object.contains_key(HOME_SERVER_URL_KEY));
    assert!(object.contains_key(IDENTITY_SERVER_URL_KEY));
    assert!(object.contains_key(CREDENTIALS_KEY));
    assert!(object.contains_key(CERTIFICATE_PINS_KEY));
}

#[test]
fn test_minimal_document_key_set() {
    let config = ConnectionConfig::new(uri("https://chat.example.org")).unwrap();
    let json = config.to_json().unwrap();
    let object = json.as_object().unwrap();

    // No credentials key, but the pin list and the (fallback-resolved)
    // identity URL are always written.
    assert_eq!(object.len(), 3);
    assert!(!object.contains_key(CREDENTIALS_KEY));
    assert_eq!(json[CERTIFICATE_PINS_KEY], serde_json::json!([]));
    assert_eq!(json[IDENTITY_SERVER_URL_KEY], "https://chat.example.org");
}

#[test]
fn test_pin_objects_carry_exactly_the_two_keys() {
    let json = sample_config().to_json().unwrap();
    let pins = json[CERTIFICATE_PINS_KEY].as_array().unwrap();

    assert_eq!(pins.len(), 2);
    for pin in pins {
        let object = pin.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert!(object.contains_key(PIN_HOSTNAME_KEY));
        assert!(object.contains_key(PIN_PUBLIC_HASH_KEY));
    }
    assert_eq!(pins[0][PIN_HOSTNAME_KEY], "chat.example.org");
    assert_eq!(pins[0][PIN_PUBLIC_HASH_KEY], "sha256/AAAA");
}

#[test]
fn test_home_server_url_is_required() {
    let json = serde_json::json!({
        IDENTITY_SERVER_URL_KEY: "https://id.example.org",
        CERTIFICATE_PINS_KEY: [],
    });
    assert!(ConnectionConfig::from_json(&json).is_err());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let json = serde_json::json!({
        HOME_SERVER_URL_KEY: "https://chat.example.org",
        "some_future_field": true,
    });
    let config = ConnectionConfig::from_json(&json).unwrap();
    assert_eq!(
        config.home_server_uri().as_str(),
        "https://chat.example.org"
    );
}
