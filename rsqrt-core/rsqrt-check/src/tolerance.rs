//! Allowed error for approximate checks.

use rsqrt_builtins::{mul32, udiv64_32};

/// Percentage margin with an absolute floor
///
/// The defaults (10%, floor 2) sit above the documented 3-8% error of `fast_rsqrt`.
/// The floor only applies when the percentage margin truncates to zero, i.e. for
/// expected values below `100 / margin_percent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Tolerance {
    pub margin_percent: u32,
    pub floor: u32,
}

impl Tolerance {
    pub const DEFAULT_MARGIN_PERCENT: u32 = 10;
    pub const DEFAULT_FLOOR: u32 = 2;

    pub const fn new(margin_percent: u32, floor: u32) -> Self {
        Self {
            margin_percent,
            floor,
        }
    }

    /// Largest accepted `|actual - expected|`.
    ///
    /// Computed with the software multiply and divide so the check itself needs no
    /// M extension.
    pub fn margin_for(&self, expected: u32) -> u64 {
        let product = mul32(expected, self.margin_percent);
        match udiv64_32(product, 100) {
            0 => u64::from(self.floor),
            margin => margin,
        }
    }

    /// Whether `actual` is within the margin of `expected`
    pub fn accepts(&self, actual: u32, expected: u32) -> bool {
        u64::from(actual.abs_diff(expected)) <= self.margin_for(expected)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MARGIN_PERCENT, Self::DEFAULT_FLOOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_margins() {
        let tol = Tolerance::default();
        assert_eq!(tol.margin_for(6554), 655);
        assert_eq!(tol.margin_for(590), 59);
        assert_eq!(tol.margin_for(66), 6);
        assert_eq!(tol.margin_for(10), 1);
        assert_eq!(tol.margin_for(9), 2);
        assert_eq!(tol.margin_for(1), 2);
        assert_eq!(tol.margin_for(0), 2);
    }

    #[test]
    fn test_large_expected_does_not_overflow() {
        let tol = Tolerance::new(100, 0);
        assert_eq!(tol.margin_for(u32::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_accepts() {
        let tol = Tolerance::default();
        assert!(tol.accepts(6553, 6554));
        assert!(tol.accepts(1, 1));
        assert!(tol.accepts(3, 1));
        assert!(!tol.accepts(4, 1));
        assert!(!tol.accepts(5000, 6554));
    }
}
