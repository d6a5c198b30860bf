//! Verification status and reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of license verification.
///
/// Starts as [`VerificationStatus::Uninitialized`] and moves exactly once to
/// one of the terminal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// Verification has not run yet.
    Uninitialized,
    /// License is valid for this device.
    Ok,
    /// Credentials are empty or placeholders.
    InvalidConfig,
    /// Configured device UID is malformed.
    InvalidUidFormat,
    /// Configured license key is malformed.
    InvalidKeyFormat,
    /// Secure element read failed.
    HardwareError,
    /// License was issued for another device.
    UidMismatch,
    /// Signature or trust anchor is invalid.
    SignatureInvalid,
}

impl VerificationStatus {
    /// Returns the numeric status code reported to external collaborators.
    #[must_use]
    pub fn code(&self) -> i32 {
        match self {
            Self::Uninitialized => -1,
            Self::Ok => 0,
            Self::InvalidConfig => 1,
            Self::InvalidUidFormat => 2,
            Self::InvalidKeyFormat => 3,
            Self::HardwareError => 4,
            Self::UidMismatch => 5,
            Self::SignatureInvalid => 6,
        }
    }

    /// Returns a human-readable description.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uninitialized => "License check not run",
            Self::Ok => "License valid",
            Self::InvalidConfig => "License not configured",
            Self::InvalidUidFormat => "Invalid device UID format",
            Self::InvalidKeyFormat => "Invalid license key format",
            Self::HardwareError => "Secure element read failed",
            Self::UidMismatch => "License not issued for this device",
            Self::SignatureInvalid => "License signature invalid",
        }
    }

    /// Returns true once verification has produced an outcome.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Uninitialized)
    }

    /// Returns true if the license is valid.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the human-readable description of `status`.
#[must_use]
pub fn status_to_string(status: VerificationStatus) -> &'static str {
    status.as_str()
}

/// A snapshot of the engine state for display or diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseReport {
    /// Latched status.
    pub status: VerificationStatus,
    /// Numeric status code.
    pub code: i32,
    /// Human-readable status.
    pub message: String,
    /// True iff the status is [`VerificationStatus::Ok`].
    pub licensed: bool,
    /// True if the signature step was skipped because of a placeholder anchor.
    pub bypassed: bool,
    /// Library version string.
    pub version: String,
}
