//! Shared test helpers for license tests.

#![allow(dead_code)]

use p256::ecdsa::{signature::Signer, Signature, SigningKey};
use p256::pkcs8::{EncodePublicKey, LineEnding};
use std::sync::atomic::{AtomicUsize, Ordering};
use uidlock_crypto::{encode_base64, encode_hex};
use uidlock_license::{
    Credential, DeviceError, DeviceIdentity, DeviceResult, IdentityProvider, TrustAnchor,
};

/// Returns a deterministic P-256 signing key from a fixed scalar.
pub fn test_signing_key() -> SigningKey {
    let seed: [u8; 32] = [
        1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24,
        25, 26, 27, 28, 29, 30, 31, 32,
    ];
    SigningKey::from_slice(&seed).unwrap()
}

/// Returns the trust anchor for a signing key.
pub fn anchor_for(signing_key: &SigningKey) -> TrustAnchor {
    let pem = signing_key
        .verifying_key()
        .to_public_key_pem(LineEnding::LF)
        .unwrap();
    TrustAnchor::from_pem(pem)
}

/// A fixed device identity.
pub fn sample_identity() -> DeviceIdentity {
    let mut bytes = [0u8; 27];
    for (i, b) in bytes.iter_mut().enumerate() {
        *b = 0xa0 ^ (i as u8);
    }
    DeviceIdentity::from_bytes(bytes)
}

/// Issues a credential for `identity`: hex UID plus base64 DER signature.
pub fn issue_credential(signing_key: &SigningKey, identity: &DeviceIdentity) -> Credential {
    let signature: Signature = signing_key.sign(identity.as_bytes());
    Credential::new(
        encode_hex(identity.as_bytes()),
        encode_base64(signature.to_der().as_bytes()),
    )
}

/// An identity provider that counts how often it is read.
pub struct CountingIdentity {
    identity: DeviceIdentity,
    reads: AtomicUsize,
}

impl CountingIdentity {
    pub fn new(identity: DeviceIdentity) -> Self {
        Self {
            identity,
            reads: AtomicUsize::new(0),
        }
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl IdentityProvider for CountingIdentity {
    fn read_unique_id(&self) -> DeviceResult<DeviceIdentity> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.identity)
    }
}

/// An identity provider whose secure element never answers correctly.
#[derive(Default)]
pub struct FailingIdentity {
    reads: AtomicUsize,
}

impl FailingIdentity {
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl IdentityProvider for FailingIdentity {
    fn read_unique_id(&self) -> DeviceResult<DeviceIdentity> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Err(DeviceError::ReadFailed("no response from secure element".into()))
    }
}
