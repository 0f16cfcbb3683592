//! Certificate pins for transport trust decisions.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single certificate pin: a hostname and the hash of a public key the
/// transport layer will accept for it.
///
/// Pins are immutable once constructed. Duplicate hostnames with different
/// hashes are allowed, since a host may present several valid keys during a
/// rotation. No uniqueness or hash-format checks are applied here.
///
/// The wire form spells the hash key `publicHashKey`; see
/// [`crate::constants`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificatePin {
    hostname: String,
    #[serde(rename = "publicHashKey")]
    public_key_hash: String,
}

impl CertificatePin {
    /// Create a pin for the given hostname and public key hash.
    pub fn new(hostname: impl Into<String>, public_key_hash: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            public_key_hash: public_key_hash.into(),
        }
    }

    /// The hostname this pin applies to.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// The pinned public key hash.
    pub fn public_key_hash(&self) -> &str {
        &self.public_key_hash
    }

    /// Encode to a JSON object.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode from a JSON object. Both keys are required.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value.clone())?)
    }
}
