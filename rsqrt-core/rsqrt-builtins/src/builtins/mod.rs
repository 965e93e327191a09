//! Reciprocal square root builtins.

pub mod rsqrt_q16;
pub mod rsqrt_reference;
pub mod rsqrt_table;
