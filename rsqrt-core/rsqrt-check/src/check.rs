//! Exact and tolerance comparisons, and their report lines.

use alloc::string::String;

use crate::error::SinkError;
use crate::fmt::write_dec;
use crate::sink::ByteSink;
use crate::tolerance::Tolerance;

/// Result of comparing one output against its expectation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckOutcome {
    pub name: String,
    pub input: u32,
    pub actual: u32,
    pub expected: u32,
    /// `|actual - expected|`
    pub diff: u32,
    /// Allowed difference; `None` for exact checks
    pub margin: Option<u64>,
    pub cycles: u64,
    pub passed: bool,
}

/// Compare for equality
pub fn check_exact(
    name: &str,
    input: u32,
    actual: u32,
    expected: u32,
    cycles: u64,
) -> CheckOutcome {
    CheckOutcome {
        name: String::from(name),
        input,
        actual,
        expected,
        diff: actual.abs_diff(expected),
        margin: None,
        cycles,
        passed: actual == expected,
    }
}

/// Compare within `tolerance`
pub fn check_approx(
    name: &str,
    input: u32,
    actual: u32,
    expected: u32,
    tolerance: &Tolerance,
    cycles: u64,
) -> CheckOutcome {
    let diff = actual.abs_diff(expected);
    let margin = tolerance.margin_for(expected);
    CheckOutcome {
        name: String::from(name),
        input,
        actual,
        expected,
        diff,
        margin: Some(margin),
        cycles,
        passed: u64::from(diff) <= margin,
    }
}

/// Write the report line for `outcome`.
///
/// ```text
///     [PASS] rsqrt(4) | Cycles: 12
///     [FAIL] rsqrt(4): Expected 32768, Got 32767 | Cycles: 12
///     [PASS] rsqrt(100) (Got: 6553) | Cycles: 40
///     [FAIL] rsqrt(100): Expected ~6554, Got 9000 (Diff: 2446, Allowed Margin: 655) | Cycles: 40
/// ```
pub fn write_outcome<S: ByteSink + ?Sized>(
    sink: &mut S,
    outcome: &CheckOutcome,
) -> Result<(), SinkError> {
    sink.write_str(if outcome.passed {
        "    [PASS] "
    } else {
        "    [FAIL] "
    })?;
    sink.write_str(&outcome.name)?;

    match (outcome.passed, outcome.margin) {
        (true, None) => {}
        (false, None) => {
            sink.write_str(": Expected ")?;
            write_dec(sink, outcome.expected.into())?;
            sink.write_str(", Got ")?;
            write_dec(sink, outcome.actual.into())?;
        }
        (true, Some(_)) => {
            sink.write_str(" (Got: ")?;
            write_dec(sink, outcome.actual.into())?;
            sink.write_str(")")?;
        }
        (false, Some(margin)) => {
            sink.write_str(": Expected ~")?;
            write_dec(sink, outcome.expected.into())?;
            sink.write_str(", Got ")?;
            write_dec(sink, outcome.actual.into())?;
            sink.write_str(" (Diff: ")?;
            write_dec(sink, outcome.diff.into())?;
            sink.write_str(", Allowed Margin: ")?;
            write_dec(sink, margin)?;
            sink.write_str(")")?;
        }
    }

    sink.write_str(" | Cycles: ")?;
    write_dec(sink, outcome.cycles)?;
    sink.write_str("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::VecSink;

    fn line(outcome: &CheckOutcome) -> String {
        let mut sink = VecSink::new();
        write_outcome(&mut sink, outcome).unwrap();
        String::from(sink.as_str().unwrap())
    }

    #[test]
    fn test_exact_pass_line() {
        let outcome = check_exact("rsqrt(4)", 4, 32768, 32768, 12);
        assert!(outcome.passed);
        assert_eq!(line(&outcome), "    [PASS] rsqrt(4) | Cycles: 12\n");
    }

    #[test]
    fn test_exact_fail_line() {
        let outcome = check_exact("rsqrt(4)", 4, 32767, 32768, 12);
        assert!(!outcome.passed);
        assert_eq!(outcome.diff, 1);
        assert_eq!(
            line(&outcome),
            "    [FAIL] rsqrt(4): Expected 32768, Got 32767 | Cycles: 12\n"
        );
    }

    #[test]
    fn test_approx_pass_line() {
        let outcome = check_approx("rsqrt(100)", 100, 6553, 6554, &Tolerance::default(), 40);
        assert!(outcome.passed);
        assert_eq!(outcome.margin, Some(655));
        assert_eq!(
            line(&outcome),
            "    [PASS] rsqrt(100) (Got: 6553) | Cycles: 40\n"
        );
    }

    #[test]
    fn test_approx_fail_line() {
        let outcome = check_approx("rsqrt(100)", 100, 9000, 6554, &Tolerance::default(), 40);
        assert!(!outcome.passed);
        assert_eq!(
            line(&outcome),
            "    [FAIL] rsqrt(100): Expected ~6554, Got 9000 \
             (Diff: 2446, Allowed Margin: 655) | Cycles: 40\n"
        );
    }

    #[test]
    fn test_approx_floor_for_small_expected() {
        let tol = Tolerance::default();
        let outcome = check_approx("rsqrt(2000000000)", 2_000_000_000, 1, 1, &tol, 0);
        assert!(outcome.passed);
        assert!(check_approx("small", 0, 3, 1, &tol, 0).passed);
        let outcome = check_approx("small", 0, 4, 1, &tol, 0);
        assert!(!outcome.passed);
        assert_eq!(outcome.margin, Some(2));
    }
}
