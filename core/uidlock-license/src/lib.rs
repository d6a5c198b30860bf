//! Device-bound license verification for uidlock.
//!
//! This module handles:
//! - Reading the device's unique identifier from a secure element
//! - Checking that the configured license names this device
//! - Verifying the license signature (ECDSA P-256 over SHA-256)
//! - Latching the outcome for the lifetime of the engine
//!
//! # Design Principles
//!
//! - **One-shot**: verification runs once; the result never changes afterwards
//! - **Ordered failures**: configuration, format, hardware, identity and
//!   signature problems are reported in that order, first failure wins
//! - **No oracle**: an unparseable trust anchor and a bad signature report
//!   the same status
//! - **Loud bypass**: a placeholder trust anchor is accepted only as an
//!   explicitly flagged bypass
//!
//! # License Format
//!
//! A license is a base64 DER ECDSA signature over the 27 raw bytes of the
//! device UID, paired with the UID itself as 54 hex characters.

mod config;
mod device;
mod engine;
mod error;
mod status;
mod version;

pub use config::{
    is_placeholder, Credential, BUILD_DEVICE_UID, BUILD_LICENSE_KEY, LICENSE_PLACEHOLDER,
    MAX_LICENSE_LEN, TRUST_ANCHOR_PEM, UID_PLACEHOLDER,
};
pub use device::{DeviceIdentity, FileIdentity, IdentityProvider, StaticIdentity, DEVICE_ID_LEN};
pub use engine::LicenseEngine;
pub use error::{DeviceError, DeviceResult, LicenseError, LicenseResult};
pub use status::{status_to_string, LicenseReport, VerificationStatus};
pub use version::{version, version_string, VERSION};

pub use uidlock_crypto::{SignatureCheck, TrustAnchor};
