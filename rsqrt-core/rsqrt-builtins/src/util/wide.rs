//! Software 32x32->64 multiply and 64/32 divide.
//!
//! Neither routine touches a hardware multiplier or divider, so they are safe to
//! use on cores that lack them (and in code that must not pull in `__muldi3` or
//! `__udivdi3` from compiler-builtins). Both run a fixed number of iterations
//! regardless of their operands.

/// Exact 64-bit product of two 32-bit operands.
///
/// Binary long multiplication: for every set bit `i` of `b`, `a << i` is added into a
/// 64-bit accumulator. The sum of all 32 partial products is at most
/// `(2^32 - 1)^2`, so the accumulator never wraps.
///
/// ```text
/// 5 * 3: 3 = 0b11 -> (5 << 0) + (5 << 1) = 5 + 10 = 15
/// ```
#[inline]
pub const fn mul32(a: u32, b: u32) -> u64 {
    let a = a as u64;
    let mut product: u64 = 0;
    let mut i = 0;
    while i < 32 {
        if b & (1 << i) != 0 {
            product += a << i;
        }
        i += 1;
    }
    product
}

/// Truncating 64/32 division. A zero divisor yields zero.
#[inline]
pub const fn udiv64_32(dividend: u64, divisor: u32) -> u64 {
    udivmod64_32(dividend, divisor).0
}

/// Restoring long division returning `(quotient, remainder)`.
///
/// Walks the dividend from bit 63 down to bit 0, shifting each bit into a running
/// remainder and subtracting the divisor whenever it fits. A zero divisor yields
/// `(0, 0)` instead of trapping.
pub const fn udivmod64_32(dividend: u64, divisor: u32) -> (u64, u32) {
    if divisor == 0 {
        return (0, 0);
    }

    let divisor = divisor as u64;
    let mut quotient: u64 = 0;
    // Always < divisor, so one extra bit of headroom is all the shift needs
    let mut remainder: u64 = 0;

    let mut i = 64;
    while i > 0 {
        i -= 1;
        remainder = (remainder << 1) | ((dividend >> i) & 1);
        if remainder >= divisor {
            remainder -= divisor;
            quotient |= 1 << i;
        }
    }

    (quotient, remainder as u32)
}
