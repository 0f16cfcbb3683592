//! Connection configuration for reaching a homeserver.
//!
//! [`ConnectionConfig`] carries everything a client needs to reach a home
//! server and its identity service: the base URIs, optional login
//! credentials, and certificate pins for transport trust. URIs are validated
//! and normalized at construction, and the whole value round-trips through a
//! JSON document so clients can persist it between runs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::SUPPORTED_SCHEMES;
use crate::credentials::Credentials;
use crate::error::{ConfigError, Result};
use crate::fingerprint::Fingerprint;
use crate::pin::CertificatePin;
use crate::uri::ServerUri;

/// Connection parameters for a homeserver and its identity service.
///
/// Construct through [`ConnectionConfig::builder()`] or the convenience
/// constructors; construction checks the URI scheme and strips a single
/// trailing `/`. Setters after construction are raw and trusted, with no
/// validation or normalization applied.
///
/// This is a plain mutable value type with no internal locking. Put it
/// behind a lock if it is shared across threads and mutated.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    home_server: ServerUri,
    identity_server: Option<ServerUri>,
    credentials: Option<Credentials>,
    certificate_pins: Vec<CertificatePin>,
}

/// Builder for [`ConnectionConfig`], the full constructor.
#[derive(Debug, Default)]
pub struct ConnectionConfigBuilder {
    home_server: Option<ServerUri>,
    identity_server: Option<ServerUri>,
    credentials: Option<Credentials>,
    certificate_pins: Vec<CertificatePin>,
}

/// Wire form of [`ConnectionConfig`].
///
/// `identity_server_url` carries the effective (fallback-resolved) value on
/// encode, while a document without it decodes to the unset state.
/// `certificate_pins` is always written, even when empty; `credentials` only
/// when set, as the opaque encoding of [`Credentials`].
#[derive(Debug, Serialize, Deserialize)]
struct ConnectionConfigWire {
    home_server_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identity_server_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    credentials: Option<serde_json::Value>,
    #[serde(default)]
    certificate_pins: Vec<CertificatePin>,
}

impl ConnectionConfig {
    /// Create a configuration builder.
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::default()
    }

    /// Create a configuration for the given home server, with no identity
    /// server, credentials, or certificate pins.
    pub fn new(home_server: ServerUri) -> Result<Self> {
        Self::builder().home_server(home_server).build()
    }

    /// Create a configuration for the given home server with login
    /// credentials.
    pub fn with_credentials(home_server: ServerUri, credentials: Credentials) -> Result<Self> {
        Self::builder()
            .home_server(home_server)
            .credentials(credentials)
            .build()
    }

    /// The home server URI.
    pub fn home_server_uri(&self) -> &ServerUri {
        &self.home_server
    }

    /// Replace the home server URI. No validation or normalization.
    pub fn set_home_server_uri(&mut self, uri: ServerUri) {
        self.home_server = uri;
    }

    /// The identity server URI, falling back to the home server URI when no
    /// identity server was configured. Never absent from the caller's view.
    pub fn identity_server_uri(&self) -> &ServerUri {
        self.identity_server.as_ref().unwrap_or(&self.home_server)
    }

    /// Replace the identity server URI; `None` restores the home-server
    /// fallback. No validation or normalization.
    pub fn set_identity_server_uri(&mut self, uri: Option<ServerUri>) {
        self.identity_server = uri;
    }

    /// The stored credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Replace the stored credentials wholesale.
    pub fn set_credentials(&mut self, credentials: Option<Credentials>) {
        self.credentials = credentials;
    }

    /// The certificate pins, in the order they were supplied at
    /// construction. The collection is fixed for the lifetime of the value.
    pub fn certificate_pins(&self) -> &[CertificatePin] {
        &self.certificate_pins
    }

    /// Whether legacy whole-certificate pinning applies.
    ///
    /// Always `false`, regardless of any other field; kept so callers
    /// written against the old trust interface keep working.
    pub fn should_pin(&self) -> bool {
        false
    }

    /// Legacy fingerprint allow-list.
    ///
    /// Always empty; see [`should_pin`](Self::should_pin).
    pub fn allowed_fingerprints(&self) -> Vec<Fingerprint> {
        Vec::new()
    }

    /// Encode to a JSON document for persistence.
    ///
    /// `identity_server_url` is written as the effective value from
    /// [`identity_server_uri`](Self::identity_server_uri), and
    /// `certificate_pins` is always present; `credentials` only when set.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        let credentials = self
            .credentials
            .as_ref()
            .map(Credentials::to_json)
            .transpose()?;
        let wire = ConnectionConfigWire {
            home_server_url: self.home_server.as_str().to_string(),
            identity_server_url: Some(self.identity_server_uri().as_str().to_string()),
            credentials,
            certificate_pins: self.certificate_pins.clone(),
        };
        Ok(serde_json::to_value(wire)?)
    }

    /// Encode to a JSON string for persistence.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }

    /// Decode a configuration from a JSON document.
    ///
    /// `home_server_url` is required; all other fields are optional. The
    /// decoded values go through the same validation and normalization as
    /// ordinary construction.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let wire: ConnectionConfigWire = serde_json::from_value(value.clone())?;

        let home_server = ServerUri::parse(&wire.home_server_url).map_err(|_| {
            ConfigError::InvalidConfiguration(format!(
                "invalid home server URI: {}",
                wire.home_server_url
            ))
        })?;
        let identity_server = wire
            .identity_server_url
            .as_deref()
            .map(|url| {
                ServerUri::parse(url).map_err(|_| {
                    ConfigError::InvalidConfiguration(format!("invalid identity server URI: {url}"))
                })
            })
            .transpose()?;
        let credentials = wire
            .credentials
            .as_ref()
            .map(Credentials::from_json)
            .transpose()?;

        debug!("restoring connection configuration for {home_server}");

        let mut builder = Self::builder()
            .home_server(home_server)
            .certificate_pins(wire.certificate_pins);
        if let Some(uri) = identity_server {
            builder = builder.identity_server(uri);
        }
        if let Some(credentials) = credentials {
            builder = builder.credentials(credentials);
        }
        builder.build()
    }

    /// Decode a configuration from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        Self::from_json(&value)
    }
}

impl ConnectionConfigBuilder {
    /// Set the home server URI. Required.
    #[must_use]
    pub fn home_server(mut self, uri: ServerUri) -> Self {
        self.home_server = Some(uri);
        self
    }

    /// Set the identity server URI.
    ///
    /// When unset, the identity accessor falls back to the home server URI.
    #[must_use]
    pub fn identity_server(mut self, uri: ServerUri) -> Self {
        self.identity_server = Some(uri);
        self
    }

    /// Set the login credentials.
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the certificate pins. The sequence is copied in order.
    #[must_use]
    pub fn certificate_pins(mut self, pins: impl IntoIterator<Item = CertificatePin>) -> Self {
        self.certificate_pins = pins.into_iter().collect();
        self
    }

    /// Build the configuration, validating and normalizing the URIs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the home server URI
    /// is missing or its scheme is not `http`/`https`, or if stripping a
    /// trailing slash leaves a string that no longer parses as a URI.
    pub fn build(self) -> Result<ConnectionConfig> {
        let home_server = self.home_server.ok_or_else(|| {
            ConfigError::InvalidConfiguration("home server URI is required".to_string())
        })?;

        if !scheme_supported(&home_server) {
            return Err(ConfigError::InvalidConfiguration(format!(
                "invalid home server URI: {home_server}"
            )));
        }

        // The identity gate reads the home server's scheme, which already
        // passed above; an identity URI carrying any scheme is accepted
        // unchanged.
        if let Some(identity) = &self.identity_server {
            if !scheme_supported(&home_server) {
                return Err(ConfigError::InvalidConfiguration(format!(
                    "invalid identity server URI: {identity}"
                )));
            }
        }

        let home_server = strip_trailing_slash(home_server, "home server")?;
        let identity_server = self
            .identity_server
            .map(|uri| strip_trailing_slash(uri, "identity server"))
            .transpose()?;

        Ok(ConnectionConfig {
            home_server,
            identity_server,
            credentials: self.credentials,
            certificate_pins: self.certificate_pins,
        })
    }
}

fn scheme_supported(uri: &ServerUri) -> bool {
    uri.scheme()
        .is_some_and(|scheme| SUPPORTED_SCHEMES.contains(&scheme))
}

/// Strip exactly one trailing `/`, re-validating the shortened string.
fn strip_trailing_slash(uri: ServerUri, what: &str) -> Result<ServerUri> {
    match uri.as_str().strip_suffix('/') {
        Some(stripped) => {
            debug!("stripping trailing slash from {what} URI: {uri}");
            ServerUri::parse(stripped).map_err(|_| {
                ConfigError::InvalidConfiguration(format!("invalid {what} URI: {uri}"))
            })
        }
        None => Ok(uri),
    }
}
