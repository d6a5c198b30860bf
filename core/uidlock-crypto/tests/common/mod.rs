//! Shared test helpers for crypto tests.

#![allow(dead_code)]

use p256::ecdsa::{signature::Signer, Signature, SigningKey};
use p256::pkcs8::{EncodePublicKey, LineEnding};

/// Returns a deterministic P-256 signing key from a fixed scalar.
pub fn test_signing_key() -> SigningKey {
    let seed: [u8; 32] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32,
    ];
    SigningKey::from_slice(&seed).unwrap()
}

/// Returns a second, unrelated signing key.
pub fn other_signing_key() -> SigningKey {
    SigningKey::from_slice(&[0x42u8; 32]).unwrap()
}

/// Returns the PEM-encoded public key for a signing key.
pub fn anchor_pem(signing_key: &SigningKey) -> String {
    signing_key
        .verifying_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap()
}

/// Signs `message` (SHA-256 digest) and returns the DER-encoded signature.
pub fn sign_der(signing_key: &SigningKey, message: &[u8]) -> Vec<u8> {
    let signature: Signature = signing_key.sign(message);
    signature.to_der().as_bytes().to_vec()
}

/// A fixed 27-byte identity.
pub fn sample_identity() -> [u8; 27] {
    let mut id = [0u8; 27];
    for (i, b) in id.iter_mut().enumerate() {
        *b = 0x10 + i as u8;
    }
    id
}
