//! Error types for the crypto layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur while decoding credentials or verifying signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Hex string has the wrong number of characters.
    #[error("invalid hex length: expected {expected} characters, got {actual}")]
    InvalidHexLength { expected: usize, actual: usize },

    /// Hex string contains a non-hex character.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// Base64 input is empty.
    #[error("base64 input is empty")]
    EmptyBase64,

    /// Base64 length is not a multiple of four.
    #[error("invalid base64 length: {0} is not a multiple of 4")]
    InvalidBase64Length(usize),

    /// Base64 input would decode to more bytes than allowed.
    #[error("base64 payload too large: {actual} bytes exceeds limit of {max}")]
    Base64TooLarge { max: usize, actual: usize },

    /// Base64 input contains a character outside the alphabet.
    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    /// Trust anchor is not a valid PEM-encoded P-256 public key.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Signature bytes are not a DER-encoded ECDSA signature.
    #[error("invalid signature encoding")]
    InvalidSignatureEncoding,

    /// Signature is well-formed but does not verify.
    #[error("signature verification failed")]
    SignatureMismatch,
}
