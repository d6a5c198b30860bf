//! Constant-time comparison of fixed-length buffers.

use subtle::{Choice, ConstantTimeEq};

/// Compares two `N`-byte buffers without an early exit.
///
/// Every byte pair is folded into the result, so the running time does not
/// depend on the position of the first mismatch.
#[must_use]
pub fn constant_time_eq<const N: usize>(a: &[u8; N], b: &[u8; N]) -> bool {
    a.iter()
        .zip(b.iter())
        .fold(Choice::from(1u8), |acc, (x, y)| acc & x.ct_eq(y))
        .into()
}
