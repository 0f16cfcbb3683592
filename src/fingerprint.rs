//! Legacy certificate fingerprints.
//!
//! Older releases pinned whole-certificate fingerprints instead of per-host
//! public key hashes. The type remains so callers written against that trust
//! interface keep compiling; new configurations never produce any.

use std::fmt;

/// Digest algorithm of a legacy fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintAlgorithm {
    Sha1,
    Sha256,
}

/// A whole-certificate fingerprint from the legacy trust store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    algorithm: FingerprintAlgorithm,
    bytes: Vec<u8>,
}

impl Fingerprint {
    /// Create a fingerprint from a raw digest.
    pub fn new(algorithm: FingerprintAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    /// The digest algorithm.
    pub fn algorithm(&self) -> FingerprintAlgorithm {
        self.algorithm
    }

    /// The raw digest bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
