//! Decimal output without hardware division.
//!
//! `core::fmt` lowers `u64` formatting to `__udivdi3`, which RV32I has to emulate
//! anyway; going through the suite's own long division keeps the report path on
//! the same primitives as the code under test.

use rsqrt_builtins::udivmod64_32;

use crate::error::SinkError;
use crate::sink::ByteSink;

/// Enough digits for `u64::MAX`
const MAX_DIGITS: usize = 20;

/// Write `value` in decimal.
pub fn write_dec<S: ByteSink + ?Sized>(sink: &mut S, value: u64) -> Result<(), SinkError> {
    let mut buf = [0u8; MAX_DIGITS];
    let mut pos = MAX_DIGITS;
    let mut rest = value;

    loop {
        let (quotient, digit) = udivmod64_32(rest, 10);
        pos -= 1;
        buf[pos] = b'0' + digit as u8;
        rest = quotient;
        if rest == 0 {
            break;
        }
    }

    sink.write_bytes(&buf[pos..])
}
