//! Suite execution and summary.

use alloc::string::String;
use alloc::vec::Vec;
use core::hint::black_box;

use crate::check::{CheckOutcome, check_approx, check_exact, write_outcome};
use crate::counter::CycleCounter;
use crate::error::CheckError;
use crate::fmt::write_dec;
use crate::sink::ByteSink;
use crate::tolerance::Tolerance;
use crate::vector::{Expectation, TestGroup};

/// Totals for one suite run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SuiteSummary {
    pub outcomes: Vec<CheckOutcome>,
    pub passed: usize,
    pub failed: usize,
    pub total_cycles: u64,
    pub total_instret: u64,
}

impl SuiteSummary {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}

/// Runs test groups against an implementation and reports through a sink
pub struct SuiteRunner<C: CycleCounter> {
    counter: C,
    tolerance: Tolerance,
    title: String,
}

impl<C: CycleCounter> SuiteRunner<C> {
    pub fn new(counter: C) -> Self {
        Self {
            counter,
            tolerance: Tolerance::default(),
            title: String::from("FastRsqrt Tests"),
        }
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn tolerance(&self) -> &Tolerance {
        &self.tolerance
    }

    /// Run every vector in `groups` through `rsqrt`.
    ///
    /// Failed comparisons are recorded in the summary; only sink failures and an
    /// empty suite are errors.
    pub fn run<F, S>(
        &self,
        groups: &[TestGroup],
        rsqrt: F,
        sink: &mut S,
    ) -> Result<SuiteSummary, CheckError>
    where
        F: Fn(u32) -> u32,
        S: ByteSink + ?Sized,
    {
        if groups.iter().all(|g| g.vectors.is_empty()) {
            return Err(CheckError::EmptySuite);
        }

        let mut summary = SuiteSummary::default();

        sink.write_str("\n=== ")?;
        sink.write_str(&self.title)?;
        sink.write_str(" ===\n\n")?;

        let start_cycles = self.counter.cycles();
        let start_instret = self.counter.instret();

        sink.write_str("  Running fast_rsqrt test suite...\n")?;
        for group in groups {
            sink.write_str("  Testing ")?;
            sink.write_str(&group.title)?;
            sink.write_str("...\n")?;

            for vector in &group.vectors {
                log::debug!("Calling {}", vector.name);

                let t_start = self.counter.cycles();
                let actual = black_box(rsqrt(black_box(vector.input)));
                let t_end = self.counter.cycles();
                let cycles = t_end.wrapping_sub(t_start);

                let outcome = match vector.expect {
                    Expectation::Exact(expected) => {
                        check_exact(&vector.name, vector.input, actual, expected, cycles)
                    }
                    Expectation::Approx(expected) => check_approx(
                        &vector.name,
                        vector.input,
                        actual,
                        expected,
                        &self.tolerance,
                        cycles,
                    ),
                };

                if outcome.passed {
                    summary.passed += 1;
                } else {
                    log::warn!(
                        "{} failed: expected {}, got {}",
                        outcome.name,
                        outcome.expected,
                        outcome.actual
                    );
                    summary.failed += 1;
                }

                write_outcome(sink, &outcome)?;
                summary.outcomes.push(outcome);
            }
        }

        summary.total_cycles = self.counter.cycles().wrapping_sub(start_cycles);
        summary.total_instret = self.counter.instret().wrapping_sub(start_instret);

        sink.write_str(if summary.all_passed() {
            "\n  Test Suite: PASSED\n"
        } else {
            "\n  Test Suite: FAILED\n"
        })?;
        sink.write_str("  Total Cycles: ")?;
        write_dec(sink, summary.total_cycles)?;
        sink.write_str("  Total Instructions: ")?;
        write_dec(sink, summary.total_instret)?;
        sink.write_str("\n")?;
        sink.write_str("\n=== All Tests Completed ===\n")?;

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::NullCounter;
    use crate::error::SinkError;
    use crate::sink::VecSink;
    use crate::vector::{TestVector, default_suite};
    use alloc::vec;
    use core::cell::Cell;
    use rsqrt_builtins::fast_rsqrt;

    /// Advances by a fixed step on every read
    struct StepCounter {
        now: Cell<u64>,
        step: u64,
    }

    impl CycleCounter for StepCounter {
        fn cycles(&self) -> u64 {
            let now = self.now.get() + self.step;
            self.now.set(now);
            now
        }

        fn instret(&self) -> u64 {
            self.now.get() / 2
        }
    }

    #[test_log::test]
    fn test_default_suite_passes() {
        let mut sink = VecSink::new();
        let summary = SuiteRunner::new(NullCounter)
            .run(&default_suite(), fast_rsqrt, &mut sink)
            .unwrap();

        assert!(summary.all_passed(), "{:?}", sink.as_str());
        assert_eq!(summary.passed, 15);
        assert_eq!(summary.failed, 0);

        let report = sink.as_str().unwrap();
        assert!(report.starts_with("\n=== FastRsqrt Tests ===\n\n"));
        assert!(report.contains("  Testing edge cases...\n"));
        assert!(report.contains("[PASS] rsqrt(0xFFFFFFFF) | Cycles: 0\n"));
        assert!(report.contains("[PASS] rsqrt(100) (Got: 6553) | Cycles: 0"));
        assert!(report.contains("\n  Test Suite: PASSED\n"));
        assert!(report.ends_with("\n=== All Tests Completed ===\n"));
    }

    #[test_log::test]
    fn test_broken_implementation_fails() {
        let mut sink = VecSink::new();
        let broken = |x| fast_rsqrt(x).wrapping_add(2000);
        let summary = SuiteRunner::new(NullCounter)
            .run(&default_suite(), broken, &mut sink)
            .unwrap();

        assert!(!summary.all_passed());
        // Only 2 (46341 +- 4634) and 10 (20723 +- 2072) absorb the offset
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failures().count(), 13);
        let report = sink.as_str().unwrap();
        assert!(report.contains("\n  Test Suite: FAILED\n"));
        let line = "    [FAIL] rsqrt(4): Expected 32768, Got 34768 | Cycles: 0\n";
        assert!(report.contains(line), "{report}");
    }

    #[test]
    fn test_cycles_are_measured_per_call() {
        let counter = StepCounter {
            now: Cell::new(0),
            step: 5,
        };
        let groups = vec![TestGroup::new("one", vec![TestVector::exact(16, 16384)])];
        let mut sink = VecSink::new();
        let summary = SuiteRunner::new(&counter)
            .run(&groups, fast_rsqrt, &mut sink)
            .unwrap();

        assert_eq!(summary.outcomes[0].cycles, 5);
        // start, before call, after call, end
        assert_eq!(summary.total_cycles, 15);
        let report = sink.as_str().unwrap();
        assert!(report.contains("  Total Cycles: 15  Total Instructions: "));
    }

    #[test]
    fn test_custom_tolerance() {
        let groups = vec![TestGroup::new(
            "tight",
            vec![TestVector::approx(100, 6554)],
        )];
        let mut sink = VecSink::new();
        let summary = SuiteRunner::new(NullCounter)
            .with_tolerance(Tolerance::new(0, 0))
            .run(&groups, fast_rsqrt, &mut sink)
            .unwrap();
        // 6553 vs 6554 with zero margin
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.outcomes[0].margin, Some(0));
    }

    #[test]
    fn test_empty_suite_is_an_error() {
        let mut sink = VecSink::new();
        let err = SuiteRunner::new(NullCounter)
            .run(&[], fast_rsqrt, &mut sink)
            .unwrap_err();
        assert_eq!(err, CheckError::EmptySuite);
        assert!(sink.as_bytes().is_empty());
    }

    #[test]
    fn test_sink_failure_propagates() {
        let mut sink = VecSink::with_limit(8);
        let err = SuiteRunner::new(NullCounter)
            .run(&default_suite(), fast_rsqrt, &mut sink)
            .unwrap_err();
        assert_eq!(err, CheckError::Sink(SinkError::Overflow { capacity: 8 }));
    }
}
