//! Integer primitives shared by the builtins.
//!
//! Everything here compiles down to add, shift and compare so it runs on RV32I
//! without the M extension.

pub mod clz;
pub mod wide;
