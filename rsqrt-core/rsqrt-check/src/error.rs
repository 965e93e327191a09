//! Error types for rsqrt-check

use alloc::string::String;
use core::fmt;

/// Failure to deliver report bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The sink no longer accepts output
    Closed,
    /// Underlying writer failed
    Io(String),
    /// A bounded sink ran out of room
    Overflow { capacity: usize },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Closed => write!(f, "Sink closed"),
            SinkError::Io(msg) => write!(f, "Sink I/O error: {msg}"),
            SinkError::Overflow { capacity } => {
                write!(f, "Sink overflow: capacity {capacity} bytes exceeded")
            }
        }
    }
}

/// Error type for running a suite
///
/// A failed comparison is not an error; it shows up as a failed `CheckOutcome`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// Report output failed
    Sink(SinkError),
    /// Nothing to run
    EmptySuite,
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::Sink(err) => write!(f, "Report error: {err}"),
            CheckError::EmptySuite => write!(f, "Suite contains no test vectors"),
        }
    }
}

impl From<SinkError> for CheckError {
    fn from(err: SinkError) -> Self {
        CheckError::Sink(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SinkError {
    // Default implementation is sufficient
}

#[cfg(feature = "std")]
impl std::error::Error for CheckError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckError::Sink(err) => Some(err),
            CheckError::EmptySuite => None,
        }
    }
}
