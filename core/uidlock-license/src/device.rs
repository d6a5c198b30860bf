//! Device identity read from the secure element.
//!
//! The secure element exposes a 27-byte unique identifier. [`DeviceIdentity`]
//! can only hold exactly that many bytes, so a driver returning a short or
//! long buffer is rejected at the boundary instead of reaching the comparison.

use crate::error::{DeviceError, DeviceResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;
use uidlock_crypto::{decode_hex, encode_hex, CryptoError};

/// Length of the secure element unique identifier in bytes.
pub const DEVICE_ID_LEN: usize = 27;

/// The device's hardware-rooted unique identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceIdentity([u8; DEVICE_ID_LEN]);

impl DeviceIdentity {
    /// Creates an identity from its raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DEVICE_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parses an identity from 54 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        decode_hex(s).map(Self)
    }

    /// Returns the raw identity bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; DEVICE_ID_LEN] {
        &self.0
    }

    /// Returns the identity as lowercase hex, the form used in credentials.
    #[must_use]
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for DeviceIdentity {
    type Error = DeviceError;

    fn try_from(bytes: &[u8]) -> DeviceResult<Self> {
        let bytes: [u8; DEVICE_ID_LEN] =
            bytes.try_into().map_err(|_| DeviceError::InvalidLength {
                expected: DEVICE_ID_LEN,
                actual: bytes.len(),
            })?;
        Ok(Self(bytes))
    }
}

impl TryFrom<String> for DeviceIdentity {
    type Error = CryptoError;

    fn try_from(s: String) -> Result<Self, CryptoError> {
        Self::from_hex(&s)
    }
}

impl From<DeviceIdentity> for String {
    fn from(id: DeviceIdentity) -> Self {
        id.to_hex()
    }
}

impl fmt::Display for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for DeviceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DeviceIdentity").field(&self.to_hex()).finish()
    }
}

/// Source of the device identity, typically a secure element driver.
///
/// `read_unique_id` blocks until the hardware answers or the driver gives up.
/// The engine imposes no timeout of its own; a driver that never returns
/// stalls the caller.
pub trait IdentityProvider: Send + Sync {
    /// Reads the device's unique identifier.
    fn read_unique_id(&self) -> DeviceResult<DeviceIdentity>;
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for Arc<T> {
    fn read_unique_id(&self) -> DeviceResult<DeviceIdentity> {
        (**self).read_unique_id()
    }
}

impl<T: IdentityProvider + ?Sized> IdentityProvider for Box<T> {
    fn read_unique_id(&self) -> DeviceResult<DeviceIdentity> {
        (**self).read_unique_id()
    }
}

/// A fixed identity, for emulators and bring-up boards without a secure element.
#[derive(Debug, Clone, Copy)]
pub struct StaticIdentity(DeviceIdentity);

impl StaticIdentity {
    /// Creates a provider that always returns `identity`.
    #[must_use]
    pub fn new(identity: DeviceIdentity) -> Self {
        Self(identity)
    }
}

impl IdentityProvider for StaticIdentity {
    fn read_unique_id(&self) -> DeviceResult<DeviceIdentity> {
        Ok(self.0)
    }
}

/// Reads an identity exported by the secure element driver to a file.
///
/// The file holds either the 27 raw bytes or 54 hex characters (surrounding
/// whitespace is ignored in the text form).
#[derive(Debug, Clone)]
pub struct FileIdentity {
    path: PathBuf,
}

impl FileIdentity {
    /// Creates a provider reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the export path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityProvider for FileIdentity {
    fn read_unique_id(&self) -> DeviceResult<DeviceIdentity> {
        debug!(path = %self.path.display(), "Reading device identity export");
        let contents = std::fs::read(&self.path)?;

        if contents.len() == DEVICE_ID_LEN {
            return DeviceIdentity::try_from(contents.as_slice());
        }

        let text = std::str::from_utf8(&contents)
            .map_err(|_| DeviceError::InvalidLength {
                expected: DEVICE_ID_LEN,
                actual: contents.len(),
            })?
            .trim();
        Ok(DeviceIdentity::from_hex(text)?)
    }
}
