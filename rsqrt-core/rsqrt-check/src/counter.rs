//! Cycle and instruction counters.

/// Source of timing for the report
///
/// On RISC-V this reads `rdcycle` / `rdinstret`. Values only need to be monotonic;
/// the suite reports differences.
pub trait CycleCounter {
    fn cycles(&self) -> u64;

    /// Retired instructions. Counters without such a source report 0.
    fn instret(&self) -> u64 {
        0
    }
}

impl<C: CycleCounter + ?Sized> CycleCounter for &C {
    fn cycles(&self) -> u64 {
        (**self).cycles()
    }

    fn instret(&self) -> u64 {
        (**self).instret()
    }
}

/// Counter that always reads zero
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCounter;

impl CycleCounter for NullCounter {
    fn cycles(&self) -> u64 {
        0
    }
}

/// Host counter: nanoseconds since creation stand in for cycles
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct InstantCounter {
    start: std::time::Instant,
}

#[cfg(feature = "std")]
impl InstantCounter {
    pub fn new() -> Self {
        Self {
            start: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for InstantCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl CycleCounter for InstantCounter {
    fn cycles(&self) -> u64 {
        // u64 nanoseconds cover ~584 years
        self.start.elapsed().as_nanos() as u64
    }
}
