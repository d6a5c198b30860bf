//! Cryptographic building blocks for uidlock.
//!
//! This crate provides:
//! - Fixed-length hex and padded base64 decoding for license credentials
//! - Constant-time comparison of fixed-length buffers
//! - ECDSA P-256 / SHA-256 verification against a PEM trust anchor
//!
//! # Security Properties
//!
//! - **No partial output**: decoders validate the full input before returning
//! - **Timing resistance**: identity comparison never exits early
//! - **Single curve**: only P-256 with SHA-256 and DER signatures is accepted

mod codec;
mod ct;
mod error;
mod signature;

pub use codec::{decode_base64, decode_hex, encode_base64, encode_hex};
pub use ct::constant_time_eq;
pub use error::{CryptoError, CryptoResult};
pub use signature::{
    verify_signature, SignatureCheck, TrustAnchor, PLACEHOLDER_MARKER,
    PLACEHOLDER_TRUST_ANCHOR_PEM,
};
