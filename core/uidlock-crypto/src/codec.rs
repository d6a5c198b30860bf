//! Hex and base64 codecs for license credentials.
//!
//! Both decoders validate the whole input before producing any output, so a
//! failed decode never leaves a partially filled buffer behind.

use crate::error::{CryptoError, CryptoResult};
use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};

/// Standard alphabet, `=` padding required on decode, trailing bits ignored.
const STANDARD_PADDED: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Maximum number of trailing `=` characters in a base64 quantum.
const MAX_PADDING: usize = 2;

/// Decodes exactly `N` bytes from a `2 * N` character hex string.
///
/// Upper and lower case digits are accepted; separators and whitespace are not.
pub fn decode_hex<const N: usize>(s: &str) -> CryptoResult<[u8; N]> {
    if s.len() != N * 2 {
        return Err(CryptoError::InvalidHexLength {
            expected: N * 2,
            actual: s.len(),
        });
    }

    let mut out = [0u8; N];
    hex::decode_to_slice(s, &mut out).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
    Ok(out)
}

/// Encodes bytes as lowercase hex.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Returns the number of bytes a padded base64 string decodes to.
///
/// The input must already be known to have a length that is a multiple of 4.
fn padded_decoded_len(s: &str) -> CryptoResult<usize> {
    let padding = s.bytes().rev().take_while(|&b| b == b'=').count();
    if padding > MAX_PADDING {
        return Err(CryptoError::InvalidBase64(format!(
            "{padding} padding characters"
        )));
    }
    Ok((s.len() / 4) * 3 - padding)
}

/// Decodes standard, padded base64 into at most `max_bytes` bytes.
pub fn decode_base64(s: &str, max_bytes: usize) -> CryptoResult<Vec<u8>> {
    if s.is_empty() {
        return Err(CryptoError::EmptyBase64);
    }
    if s.len() % 4 != 0 {
        return Err(CryptoError::InvalidBase64Length(s.len()));
    }

    let expected = padded_decoded_len(s)?;
    if expected > max_bytes {
        return Err(CryptoError::Base64TooLarge {
            max: max_bytes,
            actual: expected,
        });
    }

    let decoded = STANDARD_PADDED
        .decode(s)
        .map_err(|e| CryptoError::InvalidBase64(e.to_string()))?;
    debug_assert_eq!(decoded.len(), expected);
    Ok(decoded)
}

/// Encodes bytes as standard, padded base64.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD_PADDED.encode(bytes)
}
