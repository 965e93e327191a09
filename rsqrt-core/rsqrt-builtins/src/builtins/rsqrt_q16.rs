//! Fast reciprocal square root in Q16.16: `65536 / sqrt(x)`.
//!
//! ## Algorithm
//!
//! 1. Table lookup on the MSB position gives the estimate for `2^exp` (~20% error).
//! 2. For inputs that are not a power of two, linear interpolation between
//!    `table[exp]` and `table[exp + 1]` (~10% error).
//! 3. Two Newton-Raphson steps `y <- y * (3 - x * y^2) / 2` (3-8% error).
//!
//! A power of two returns its table entry untouched. Every multiply goes through
//! [`mul32`] so the routine never needs a hardware multiplier.
//!
//! ## Edge cases
//!
//! ```text
//! fast_rsqrt(0)           = 0xFFFF_FFFF  (stands in for infinity)
//! fast_rsqrt(1)           = 65536
//! fast_rsqrt(0xFFFF_FFFF) = 1            (smallest nonzero result)
//! ```

use crate::builtins::rsqrt_table::table_estimate;
use crate::util::clz::clz32;
use crate::util::wide::mul32;

/// Result for `x == 0`.
pub const RSQRT_OF_ZERO: u32 = 0xFFFF_FFFF;

/// Result for `x == 1`: 1.0 in Q16.16.
pub const RSQRT_OF_ONE: u32 = 1 << 16;

/// Refinement steps applied after interpolation.
pub const NEWTON_ITERATIONS: usize = 2;

/// 3.0 in Q16.16
const THREE: u32 = 3 << 16;

/// Intermediate estimates of a single evaluation.
///
/// For `0`, `1` and powers of two every field holds the final result and
/// `refined` is false.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RsqrtStages {
    pub input: u32,
    /// Raw table entry for the MSB position.
    pub table: u32,
    /// Estimate after interpolation.
    pub interpolated: u32,
    /// Estimate after each Newton-Raphson step.
    pub newton: [u32; NEWTON_ITERATIONS],
    pub result: u32,
    /// Whether interpolation and refinement ran.
    pub refined: bool,
}

impl RsqrtStages {
    #[inline(always)]
    const fn exact(input: u32, value: u32) -> Self {
        RsqrtStages {
            input,
            table: value,
            interpolated: value,
            newton: [value; NEWTON_ITERATIONS],
            result: value,
            refined: false,
        }
    }
}

/// Approximate `65536 / sqrt(x)`.
///
/// Total over `u32`. Exact at 0, 1, `u32::MAX` and every power of two (where
/// "exact" means the table entry); within a few percent everywhere else.
#[inline]
pub fn fast_rsqrt(x: u32) -> u32 {
    match x {
        0 => return RSQRT_OF_ZERO,
        1 => return RSQRT_OF_ONE,
        _ => {}
    }

    let exp = 31 - clz32(x);
    let mut y = table_estimate(exp);
    if x == 1 << exp {
        return y;
    }

    y = interpolate(x, exp, y);
    for _ in 0..NEWTON_ITERATIONS {
        y = newton_step(x, y);
    }
    y
}

/// Same arithmetic as [`fast_rsqrt`], keeping every intermediate estimate.
pub fn fast_rsqrt_stages(x: u32) -> RsqrtStages {
    match x {
        0 => return RsqrtStages::exact(x, RSQRT_OF_ZERO),
        1 => return RsqrtStages::exact(x, RSQRT_OF_ONE),
        _ => {}
    }

    let exp = 31 - clz32(x);
    let table = table_estimate(exp);
    if x == 1 << exp {
        return RsqrtStages::exact(x, table);
    }

    let interpolated = interpolate(x, exp, table);
    let mut newton = [0; NEWTON_ITERATIONS];
    let mut y = interpolated;
    for step in newton.iter_mut() {
        y = newton_step(x, y);
        *step = y;
    }

    log::trace!(
        "rsqrt({x}): exp={exp} table={table} interpolated={interpolated} newton={newton:?}"
    );

    RsqrtStages {
        input: x,
        table,
        interpolated,
        newton,
        result: y,
        refined: true,
    }
}

/// Blend `table[exp]` toward `table[exp + 1]` by the position of `x` in
/// `[2^exp, 2^(exp + 1))`.
///
/// `frac` is that position with 16 fractional bits, so `frac < 65536` and the
/// correction never exceeds `delta`.
#[inline(always)]
fn interpolate(x: u32, exp: u32, y: u32) -> u32 {
    let y_next = table_estimate(exp + 1);
    let delta = y - y_next;
    let offset = x as u64 - (1u64 << exp);
    let frac = ((offset << 16) >> exp) as u32;
    y - (mul32(delta, frac) >> 16) as u32
}

/// One Newton-Raphson step for `1 / sqrt(x)` in Q16.16.
///
/// `y^2` is kept in the low 32 bits (Q0.32), `x * y^2` is brought back to Q16.16,
/// and the final `>> 17` folds the halving into the rescale. The subtraction wraps
/// the same way the 32-bit register arithmetic does.
#[inline(always)]
fn newton_step(x: u32, y: u32) -> u32 {
    let y2 = mul32(y, y) as u32;
    let xy2 = (mul32(x, y2) >> 16) as u32;
    (mul32(y, THREE.wrapping_sub(xy2)) >> 17) as u32
}

/// C-ABI entry point for bare-metal callers.
#[unsafe(no_mangle)]
pub extern "C" fn __rsqrt_fast_u32(x: u32) -> u32 {
    fast_rsqrt(x)
}
