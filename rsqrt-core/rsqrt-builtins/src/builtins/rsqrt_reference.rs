//! Exact reference for `65536 / sqrt(x)`, truncated.
//!
//! `floor(sqrt(floor(2^32 / x))) == floor(sqrt(2^32 / x))`, so the reference needs
//! one 64/32 division and an integer square root. No floating point is involved.

use crate::util::wide::udiv64_32;

/// `floor(65536 / sqrt(x))`, or `None` for zero.
pub fn rsqrt_reference(x: u32) -> Option<u32> {
    if x == 0 {
        return None;
    }
    let scaled = udiv64_32(1 << 32, x);
    Some(scaled.isqrt() as u32)
}
