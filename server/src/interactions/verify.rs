//! Ed25519 Webhook Signature Verification
//!
//! Discord signs every interaction webhook with the application's Ed25519
//! key over `timestamp || body`. Verification runs before any JSON parsing
//! so unauthenticated payloads are never processed.

use anyhow::{Context, Result};
use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use thiserror::Error;
use tracing::debug;

/// Why a signature was rejected.
///
/// Internal only: callers see a plain `bool` so every rejection is
/// indistinguishable to the requester.
#[derive(Debug, Error)]
enum Rejection {
    #[error("signature is not valid hex")]
    MalformedHex,
    #[error("signature has the wrong length")]
    WrongLength,
    #[error("signature does not match")]
    Mismatch,
}

/// Verifies inbound webhook signatures against the application public key.
pub struct SignatureVerifier {
    key: VerifyingKey,
}

impl SignatureVerifier {
    /// Build a verifier from a hex-encoded Ed25519 public key.
    pub fn from_hex(public_key_hex: &str) -> Result<Self> {
        let bytes = hex::decode(public_key_hex).context("public key is not valid hex")?;
        let bytes: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .ok()
            .context("public key must be exactly 32 bytes")?;
        let key = VerifyingKey::from_bytes(&bytes).context("invalid Ed25519 public key")?;

        Ok(Self { key })
    }

    /// Verify a signature over `timestamp || body`.
    ///
    /// Pure function over its inputs. Any failure - bad hex, wrong length,
    /// cryptographic mismatch - returns `false`; the reason is logged at
    /// debug level only.
    #[must_use]
    pub fn verify(&self, timestamp: &str, body: &[u8], signature_hex: &str) -> bool {
        match self.check(timestamp, body, signature_hex) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%reason, "Rejected webhook signature");
                false
            }
        }
    }

    fn check(&self, timestamp: &str, body: &[u8], signature_hex: &str) -> Result<(), Rejection> {
        let sig_bytes = hex::decode(signature_hex).map_err(|_| Rejection::MalformedHex)?;
        let signature =
            Signature::from_slice(&sig_bytes).map_err(|_| Rejection::WrongLength)?;

        let mut message = Vec::with_capacity(timestamp.len() + body.len());
        message.extend_from_slice(timestamp.as_bytes());
        message.extend_from_slice(body);

        self.key
            .verify(&message, &signature)
            .map_err(|_| Rejection::Mismatch)
    }
}
