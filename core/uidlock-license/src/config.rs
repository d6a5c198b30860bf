//! Build-time license configuration.
//!
//! The device UID, the license signature and the trust anchor are baked into
//! the binary from environment variables at compile time:
//!
//! - `UIDLOCK_DEVICE_UID`: 54 hex characters (27 bytes)
//! - `UIDLOCK_LICENSE_KEY`: base64 DER signature, at most 128 decoded bytes
//! - `UIDLOCK_TRUST_ANCHOR_PEM`: PEM-encoded P-256 public key
//!
//! Unset variables fall back to sentinels that the engine reports as
//! unconfigured.

use uidlock_crypto::PLACEHOLDER_TRUST_ANCHOR_PEM;

/// Sentinel for a device UID the integrator has not filled in.
pub const UID_PLACEHOLDER: &str = "YOUR_DEVICE_UID_HERE";

/// Sentinel for a license key the integrator has not filled in.
pub const LICENSE_PLACEHOLDER: &str = "YOUR_LICENSE_KEY_HERE";

/// Maximum decoded size of the license signature in bytes.
pub const MAX_LICENSE_LEN: usize = 128;

/// Device UID compiled into this build.
pub const BUILD_DEVICE_UID: &str = match option_env!("UIDLOCK_DEVICE_UID") {
    Some(uid) => uid,
    None => UID_PLACEHOLDER,
};

/// License key compiled into this build.
pub const BUILD_LICENSE_KEY: &str = match option_env!("UIDLOCK_LICENSE_KEY") {
    Some(key) => key,
    None => LICENSE_PLACEHOLDER,
};

/// Trust anchor compiled into this build. Rotating it requires a rebuild.
pub const TRUST_ANCHOR_PEM: &str = match option_env!("UIDLOCK_TRUST_ANCHOR_PEM") {
    Some(pem) => pem,
    None => PLACEHOLDER_TRUST_ANCHOR_PEM,
};

/// Returns true if either credential is empty or still a sentinel.
#[must_use]
pub fn is_placeholder(uid: &str, license: &str) -> bool {
    uid.is_empty() || license.is_empty() || uid == UID_PLACEHOLDER || license == LICENSE_PLACEHOLDER
}

/// The license credential: expected device UID and its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    uid_hex: String,
    license_b64: String,
}

impl Credential {
    /// Creates a credential from a hex device UID and a base64 signature.
    pub fn new(uid_hex: impl Into<String>, license_b64: impl Into<String>) -> Self {
        Self {
            uid_hex: uid_hex.into(),
            license_b64: license_b64.into(),
        }
    }

    /// Returns the credential compiled into this build.
    #[must_use]
    pub fn from_build() -> Self {
        Self::new(BUILD_DEVICE_UID, BUILD_LICENSE_KEY)
    }

    /// Returns the hex-encoded expected device UID.
    #[must_use]
    pub fn uid_hex(&self) -> &str {
        &self.uid_hex
    }

    /// Returns the base64-encoded license signature.
    #[must_use]
    pub fn license_b64(&self) -> &str {
        &self.license_b64
    }

    /// Returns true if the credential has not been filled in.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        is_placeholder(&self.uid_hex, &self.license_b64)
    }
}

impl Default for Credential {
    fn default() -> Self {
        Self::from_build()
    }
}
