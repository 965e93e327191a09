//! Fixed-point reciprocal square root for targets without a multiply or divide unit.
//!
//! This crate provides:
//! - `fast_rsqrt`: `65536 / sqrt(x)` for any `u32`, as a Q16.16 value
//! - The integer building blocks it runs on: leading-zero count, 32x32->64 multiply
//!   and 64/32 division, all written with add/shift/compare only
//! - A C-ABI symbol so bare-metal programs can link the routine directly

#![no_std]

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod builtins;
pub mod util;

pub use builtins::rsqrt_q16::{
    NEWTON_ITERATIONS, RSQRT_OF_ONE, RSQRT_OF_ZERO, RsqrtStages, fast_rsqrt, fast_rsqrt_stages,
};
pub use builtins::rsqrt_reference::rsqrt_reference;
pub use builtins::rsqrt_table::{RSQRT_TABLE, table_estimate};
pub use util::clz::{clz32, msb_index};
pub use util::wide::{mul32, udiv64_32, udivmod64_32};
