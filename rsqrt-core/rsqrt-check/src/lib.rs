//! Verification suite for `fast_rsqrt`.
//!
//! Runs fixed input vectors through a reciprocal square root implementation, compares
//! each result exactly or within a percentage tolerance, and writes a pass/fail report
//! through a [`ByteSink`]. Timing comes from a [`CycleCounter`], so the same suite runs
//! on bare metal (syscall output, `rdcycle`) and on a host (stdout, `Instant`).

#![no_std]

extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

pub mod check;
pub mod counter;
pub mod error;
pub mod fmt;
pub mod runner;
pub mod sink;
pub mod tolerance;
pub mod vector;

pub use check::{CheckOutcome, check_approx, check_exact, write_outcome};
pub use counter::{CycleCounter, NullCounter};
pub use error::{CheckError, SinkError};
pub use runner::{SuiteRunner, SuiteSummary};
pub use sink::{ByteSink, VecSink};
pub use tolerance::Tolerance;
pub use vector::{Expectation, TestGroup, TestVector, default_suite};

#[cfg(feature = "std")]
pub use counter::InstantCounter;
#[cfg(feature = "std")]
pub use sink::IoSink;
