//! Initial estimates for the reciprocal square root, indexed by MSB position.
//!
//! For an input `x` with its highest set bit at `exp = 31 - clz(x)`, the starting
//! estimate is `RSQRT_TABLE[exp]`:
//!
//! ```text
//! x = 16   (2^4)  -> exp = 4  -> 16384
//! x = 1024 (2^10) -> exp = 10 -> 2048
//! ```

/// `round(65536 / sqrt(2^n))` for `n` in `0..32`.
///
/// Entry 0 would be 65536, one past `u16::MAX`; it is stored as 65535 and the engine
/// answers `x == 1` directly. Entry 19 is truncated (90.51 -> 90), not rounded.
pub const RSQRT_TABLE: [u16; 32] = [
    65535, 46341, 32768, 23170, 16384, // 2^0 to 2^4
    11585, 8192, 5793, 4096, 2896, // 2^5 to 2^9
    2048, 1448, 1024, 724, 512, // 2^10 to 2^14
    362, 256, 181, 128, 90, // 2^15 to 2^19
    64, 45, 32, 23, 16, // 2^20 to 2^24
    11, 8, 6, 4, 3, // 2^25 to 2^29
    2, 1, // 2^30, 2^31
];

/// Table entry for `exp`, or 0 past the end of the table.
///
/// Reading one past the last exponent is how interpolation treats the segment
/// above `2^31`.
#[inline(always)]
pub const fn table_estimate(exp: u32) -> u32 {
    if exp < 32 {
        RSQRT_TABLE[exp as usize] as u32
    } else {
        0
    }
}
