//! ECDSA P-256 / SHA-256 signature verification against a trust anchor.
//!
//! The trust anchor is a PEM-encoded SubjectPublicKeyInfo compiled into the
//! firmware. Until an integrator replaces it, it contains a run of
//! [`PLACEHOLDER_MARKER`] characters; verification against such an anchor is
//! skipped and reported as [`SignatureCheck::Bypassed`] so callers can tell it
//! apart from a real verification.

use crate::error::{CryptoError, CryptoResult};
use p256::ecdsa::{signature::hazmat::PrehashVerifier, Signature, VerifyingKey};
use p256::pkcs8::DecodePublicKey;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Run of characters marking a trust anchor that has not been configured.
pub const PLACEHOLDER_MARKER: &str = "XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX";

/// Trust anchor shipped until a real public key is provisioned.
pub const PLACEHOLDER_TRUST_ANCHOR_PEM: &str = "-----BEGIN PUBLIC KEY-----
XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX
XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX
-----END PUBLIC KEY-----
";

/// Outcome of a successful signature check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureCheck {
    /// The signature verified against the trust anchor.
    Verified,
    /// The trust anchor is a placeholder; nothing was verified.
    Bypassed,
}

impl SignatureCheck {
    /// Returns true if verification was skipped.
    #[must_use]
    pub fn is_bypassed(&self) -> bool {
        matches!(self, Self::Bypassed)
    }
}

/// A PEM-encoded ECDSA P-256 public key used to verify license signatures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustAnchor {
    pem: String,
}

impl TrustAnchor {
    /// Wraps PEM text. Parsing is deferred until [`TrustAnchor::verify`].
    pub fn from_pem(pem: impl Into<String>) -> Self {
        Self { pem: pem.into() }
    }

    /// Returns the PEM text.
    #[must_use]
    pub fn pem(&self) -> &str {
        &self.pem
    }

    /// Returns true if the anchor still contains the placeholder marker.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.pem.contains(PLACEHOLDER_MARKER)
    }

    /// Parses the anchor as a P-256 verifying key.
    fn verifying_key(&self) -> CryptoResult<VerifyingKey> {
        VerifyingKey::from_public_key_pem(&self.pem)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))
    }

    /// Verifies a DER-encoded signature over `SHA-256(message)`.
    ///
    /// # Errors
    ///
    /// Returns [`CryptoError::InvalidPublicKey`] if the anchor does not parse,
    /// [`CryptoError::InvalidSignatureEncoding`] if the signature is not DER,
    /// and [`CryptoError::SignatureMismatch`] if verification fails.
    pub fn verify(&self, message: &[u8], signature: &[u8]) -> CryptoResult<SignatureCheck> {
        #[cfg(not(feature = "strict-anchor"))]
        if self.is_placeholder() {
            tracing::warn!("trust anchor is a placeholder, signature verification bypassed");
            return Ok(SignatureCheck::Bypassed);
        }

        let verifying_key = self.verifying_key()?;
        let signature =
            Signature::from_der(signature).map_err(|_| CryptoError::InvalidSignatureEncoding)?;

        let digest = Sha256::digest(message);
        verifying_key
            .verify_prehash(&digest, &signature)
            .map_err(|_| CryptoError::SignatureMismatch)?;

        debug!("license signature verified");
        Ok(SignatureCheck::Verified)
    }
}

/// Boolean form of [`TrustAnchor::verify`]: true if verified or bypassed.
#[must_use]
pub fn verify_signature(message: &[u8], signature: &[u8], trust_anchor_pem: &str) -> bool {
    TrustAnchor::from_pem(trust_anchor_pem)
        .verify(message, signature)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_pem_contains_marker() {
        assert!(TrustAnchor::from_pem(PLACEHOLDER_TRUST_ANCHOR_PEM).is_placeholder());
    }

    #[test]
    fn short_runs_are_not_placeholders() {
        let anchor = TrustAnchor::from_pem("-----BEGIN PUBLIC KEY-----\nXXXX\n-----END PUBLIC KEY-----\n");
        assert!(!anchor.is_placeholder());
    }

    #[test]
    fn garbage_anchor_is_rejected() {
        let anchor = TrustAnchor::from_pem("not a key");
        assert!(matches!(
            anchor.verify(b"message", &[0u8; 8]),
            Err(CryptoError::InvalidPublicKey(_))
        ));
    }
}
