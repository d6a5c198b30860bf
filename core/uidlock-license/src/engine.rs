//! The license engine: a one-shot, latched verification state machine.
//!
//! [`LicenseEngine::initialize`] runs the verification sequence once and
//! latches the outcome. Every later call, and every query, reads the latched
//! value without touching the secure element or repeating cryptography.
//!
//! Verification order (first failure wins):
//!
//! 1. credentials are configured
//! 2. device UID decodes from hex to 27 bytes
//! 3. license key decodes from base64 to at most 128 bytes
//! 4. device identity is read from the secure element
//! 5. device identity equals the configured UID (constant time)
//! 6. license signature verifies over the configured UID
//!
//! There is no way to re-run verification on an engine; recovering from a
//! failure means constructing a new engine, normally by restarting the process.

use crate::config::{Credential, MAX_LICENSE_LEN, TRUST_ANCHOR_PEM};
use crate::device::{DeviceIdentity, IdentityProvider, DEVICE_ID_LEN};
use crate::error::{DeviceResult, LicenseError, LicenseResult};
use crate::status::{LicenseReport, VerificationStatus};
use crate::version::version_string;
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::{debug, info, warn};
use uidlock_crypto::{constant_time_eq, decode_base64, decode_hex, SignatureCheck, TrustAnchor};

/// Latched result of the verification sequence.
#[derive(Debug, Clone, Copy)]
struct Outcome {
    status: VerificationStatus,
    bypassed: bool,
}

/// Verifies that the configured license was issued for this device.
///
/// The engine owns its credential, trust anchor, identity provider, cached
/// identity and latched status. Share it by reference (or `Arc`) once built.
pub struct LicenseEngine<P> {
    credential: Credential,
    anchor: TrustAnchor,
    provider: P,
    identity: Mutex<Option<DeviceIdentity>>,
    outcome: OnceLock<Outcome>,
}

impl<P: IdentityProvider> LicenseEngine<P> {
    /// Creates an engine in the [`VerificationStatus::Uninitialized`] state.
    pub fn new(credential: Credential, anchor: TrustAnchor, provider: P) -> Self {
        Self {
            credential,
            anchor,
            provider,
            identity: Mutex::new(None),
            outcome: OnceLock::new(),
        }
    }

    /// Creates an engine using the credential and trust anchor compiled into
    /// this build.
    pub fn from_build(provider: P) -> Self {
        Self::new(
            Credential::from_build(),
            TrustAnchor::from_pem(TRUST_ANCHOR_PEM),
            provider,
        )
    }

    /// Runs verification on first call and returns the latched status.
    ///
    /// Concurrent first calls are serialized: one runs the sequence, the
    /// others wait for its result.
    pub fn initialize(&self) -> VerificationStatus {
        self.outcome
            .get_or_init(|| {
                let outcome = match self.verify() {
                    Ok(check) => Outcome {
                        status: VerificationStatus::Ok,
                        bypassed: check.is_bypassed(),
                    },
                    Err(e) => {
                        warn!(error = %e, "License verification failed");
                        Outcome {
                            status: e.status(),
                            bypassed: false,
                        }
                    }
                };

                if outcome.bypassed {
                    warn!("License accepted WITHOUT signature verification: trust anchor is a placeholder");
                }
                info!(
                    status = %outcome.status,
                    code = outcome.status.code(),
                    "License status latched"
                );
                outcome
            })
            .status
    }

    /// Runs the ordered verification sequence.
    fn verify(&self) -> LicenseResult<SignatureCheck> {
        if self.credential.is_placeholder() {
            return Err(LicenseError::NotConfigured);
        }

        let expected: [u8; DEVICE_ID_LEN] =
            decode_hex(self.credential.uid_hex()).map_err(LicenseError::InvalidUidFormat)?;
        debug!("Configured device UID decoded");

        let signature = decode_base64(self.credential.license_b64(), MAX_LICENSE_LEN)
            .map_err(LicenseError::InvalidKeyFormat)?;
        debug!(signature_len = signature.len(), "License key decoded");

        let device = self.read_identity()?;
        debug!(device = %device, "Device identity read");

        if !constant_time_eq(device.as_bytes(), &expected) {
            return Err(LicenseError::UidMismatch);
        }

        self.anchor
            .verify(&expected, &signature)
            .map_err(LicenseError::InvalidSignature)
    }

    /// Returns the cached identity, reading it from the provider if needed.
    ///
    /// Only successful reads are cached.
    fn read_identity(&self) -> DeviceResult<DeviceIdentity> {
        let mut cached = self.identity.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(identity) = *cached {
            return Ok(identity);
        }

        let identity = self.provider.read_unique_id()?;
        *cached = Some(identity);
        Ok(identity)
    }

    /// Returns the device identity, independent of license validity.
    ///
    /// Uses the identity cached by [`LicenseEngine::initialize`] if present;
    /// otherwise reads it from the secure element. Used by provisioning
    /// flows that need the UID before a license exists.
    pub fn device_identity(&self) -> DeviceResult<DeviceIdentity> {
        self.read_identity()
    }

    /// Returns the latched status, or `Uninitialized` before the first run.
    #[must_use]
    pub fn status(&self) -> VerificationStatus {
        self.outcome
            .get()
            .map_or(VerificationStatus::Uninitialized, |o| o.status)
    }

    /// Returns true iff the latched status is [`VerificationStatus::Ok`].
    #[must_use]
    pub fn is_licensed(&self) -> bool {
        self.status().is_ok()
    }

    /// Returns true if the license was accepted without checking its
    /// signature because the trust anchor is a placeholder.
    #[must_use]
    pub fn verification_bypassed(&self) -> bool {
        self.outcome.get().is_some_and(|o| o.bypassed)
    }

    /// Returns the configured credential.
    #[must_use]
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Returns the trust anchor.
    #[must_use]
    pub fn trust_anchor(&self) -> &TrustAnchor {
        &self.anchor
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn report(&self) -> LicenseReport {
        let status = self.status();
        LicenseReport {
            status,
            code: status.code(),
            message: status.as_str().to_string(),
            licensed: status.is_ok(),
            bypassed: self.verification_bypassed(),
            version: version_string().to_string(),
        }
    }
}

impl<P> std::fmt::Debug for LicenseEngine<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LicenseEngine")
            .field("credential", &self.credential)
            .field("outcome", &self.outcome.get())
            .finish_non_exhaustive()
    }
}
