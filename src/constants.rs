//! Wire identifiers for persisted connection configurations.
//!
//! The key names below are fixed: documents written by earlier releases must
//! keep decoding, so use these constants instead of string literals when
//! producing or asserting the format.

/// JSON key for the home server URL.
pub const HOME_SERVER_URL_KEY: &str = "home_server_url";

/// JSON key for the identity server URL.
pub const IDENTITY_SERVER_URL_KEY: &str = "identity_server_url";

/// JSON key for the nested credentials object.
pub const CREDENTIALS_KEY: &str = "credentials";

/// JSON key for the certificate pin list.
pub const CERTIFICATE_PINS_KEY: &str = "certificate_pins";

/// JSON key for a certificate pin's hostname.
pub const PIN_HOSTNAME_KEY: &str = "hostname";

/// JSON key for a certificate pin's public key hash (`publicHashKey`, as
/// written by every release so far).
pub const PIN_PUBLIC_HASH_KEY: &str = "publicHashKey";

/// URI schemes accepted for the home server.
pub const SUPPORTED_SCHEMES: &[&str] = &["http", "https"];
