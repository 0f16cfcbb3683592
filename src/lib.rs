//! # `homelink-config`
//!
//! Connection configuration for Homelink homeserver clients.
//!
//! A client needs a handful of values to reach its homeserver: the server's
//! base URI, the identity service URI (when it differs from the homeserver),
//! the credentials obtained at login, and the certificate pins the transport
//! layer should trust. [`ConnectionConfig`] bundles those values, validates
//! them at construction, and round-trips losslessly through a JSON document
//! so the configuration can be persisted and reloaded.
//!
//! ## Quick start
//!
//! ```rust
//! use homelink_config::{ConnectionConfig, ServerUri};
//!
//! # fn main() -> homelink_config::Result<()> {
//! let home_server: ServerUri = "https://chat.example.org/".parse()?;
//! let config = ConnectionConfig::new(home_server)?;
//!
//! // The trailing slash is stripped at construction.
//! assert_eq!(config.home_server_uri().as_str(), "https://chat.example.org");
//!
//! let saved = config.to_json()?;
//! let restored = ConnectionConfig::from_json(&saved)?;
//! assert_eq!(restored.home_server_uri(), config.home_server_uri());
//! # Ok(())
//! # }
//! ```
//!
//! Persistence itself (file, keychain, database) is the caller's concern;
//! this crate only produces and consumes the JSON document.

pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod fingerprint;
pub mod pin;
pub mod uri;

pub use config::{ConnectionConfig, ConnectionConfigBuilder};
pub use credentials::Credentials;
pub use error::{ConfigError, Result};
pub use fingerprint::{Fingerprint, FingerprintAlgorithm};
pub use pin::CertificatePin;
pub use uri::ServerUri;
