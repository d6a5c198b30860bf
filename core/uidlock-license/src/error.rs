//! Error types for the licensing module.

use crate::status::VerificationStatus;
use thiserror::Error;
use uidlock_crypto::CryptoError;

/// Errors raised while reading the device identity from the secure element.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// The secure element did not answer or reported a failure.
    #[error("secure element read failed: {0}")]
    ReadFailed(String),

    /// The secure element returned the wrong number of bytes.
    #[error("invalid device identity length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A textual identity export could not be decoded.
    #[error("invalid device identity encoding: {0}")]
    Encoding(#[from] CryptoError),

    /// I/O error while reading an identity export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for device identity operations.
pub type DeviceResult<T> = Result<T, DeviceError>;

/// Licensing-specific errors, one per terminal verification outcome.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Device UID or license key is empty or still a placeholder.
    #[error("license credentials not configured")]
    NotConfigured,

    /// Configured device UID is not 54 hex characters.
    #[error("invalid device UID format: {0}")]
    InvalidUidFormat(CryptoError),

    /// Configured license key is not valid base64 or is too large.
    #[error("invalid license key format: {0}")]
    InvalidKeyFormat(CryptoError),

    /// Device identity could not be read.
    #[error("hardware error: {0}")]
    Hardware(#[from] DeviceError),

    /// License was issued for a different device.
    #[error("license was not issued for this device")]
    UidMismatch,

    /// Trust anchor did not parse or the signature did not verify.
    #[error("license key signature invalid")]
    InvalidSignature(CryptoError),
}

impl LicenseError {
    /// Returns the terminal status this error latches.
    #[must_use]
    pub fn status(&self) -> VerificationStatus {
        match self {
            Self::NotConfigured => VerificationStatus::InvalidConfig,
            Self::InvalidUidFormat(_) => VerificationStatus::InvalidUidFormat,
            Self::InvalidKeyFormat(_) => VerificationStatus::InvalidKeyFormat,
            Self::Hardware(_) => VerificationStatus::HardwareError,
            Self::UidMismatch => VerificationStatus::UidMismatch,
            Self::InvalidSignature(_) => VerificationStatus::SignatureInvalid,
        }
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
