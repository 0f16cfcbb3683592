//! Server URIs held in their exact persisted form.

use std::fmt;
use std::str::FromStr;

use http::Uri;

use crate::error::{ConfigError, Result};

/// A server base URI, kept in the exact string form it was supplied in.
///
/// The string is parsed with [`http::Uri`] once at construction to reject
/// malformed input and to expose the scheme, but the stored text is never
/// rewritten: a trailing slash stays unless the configuration constructor
/// strips it, and the persisted document carries the string byte for byte.
#[derive(Debug, Clone)]
pub struct ServerUri {
    raw: String,
    parsed: Uri,
}

impl ServerUri {
    /// Parse a URI from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfiguration`] if the string is not a
    /// well-formed URI. The scheme is not restricted here; the configuration
    /// constructor applies its own scheme rules.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let parsed = raw
            .parse::<Uri>()
            .map_err(|_| ConfigError::InvalidConfiguration(format!("invalid URI: {raw}")))?;
        Ok(Self { raw, parsed })
    }

    /// The URI exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The scheme, lowercased by the parser (`None` for scheme-less URIs).
    pub fn scheme(&self) -> Option<&str> {
        self.parsed.scheme_str()
    }

    /// The parsed form, for callers that need structured access (host, port).
    pub fn as_uri(&self) -> &Uri {
        &self.parsed
    }
}

impl AsRef<str> for ServerUri {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl FromStr for ServerUri {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for ServerUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for ServerUri {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for ServerUri {}
