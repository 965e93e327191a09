//! Test vectors and the default suite.

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// What a vector's result is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Expectation {
    /// Must match bit for bit
    Exact(u32),
    /// Must fall within the suite's tolerance
    Approx(u32),
}

impl Expectation {
    pub fn value(&self) -> u32 {
        match self {
            Expectation::Exact(v) | Expectation::Approx(v) => *v,
        }
    }
}

/// One input and its expected result
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestVector {
    pub name: String,
    pub input: u32,
    pub expect: Expectation,
}

impl TestVector {
    /// Vector named `rsqrt(<input>)`
    pub fn new(input: u32, expect: Expectation) -> Self {
        Self {
            name: format!("rsqrt({input})"),
            input,
            expect,
        }
    }

    pub fn exact(input: u32, expected: u32) -> Self {
        Self::new(input, Expectation::Exact(expected))
    }

    pub fn approx(input: u32, expected: u32) -> Self {
        Self::new(input, Expectation::Approx(expected))
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Vectors reported under a common heading
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestGroup {
    pub title: String,
    pub vectors: Vec<TestVector>,
}

impl TestGroup {
    pub fn new(title: impl Into<String>, vectors: Vec<TestVector>) -> Self {
        Self {
            title: title.into(),
            vectors,
        }
    }
}

/// The firmware suite: edge cases, powers of two, and general inputs.
///
/// Approximate expectations are `(u32)(65536.0 / sqrt(x))` rounded to the nearest
/// integer, checked against the default 10% tolerance.
pub fn default_suite() -> Vec<TestGroup> {
    vec![
        TestGroup::new(
            "edge cases",
            vec![
                TestVector::exact(0, 0xFFFF_FFFF),
                TestVector::exact(1, 65536),
                TestVector::exact(0xFFFF_FFFF, 1)
                    .with_name("rsqrt(0xFFFFFFFF)"),
            ],
        ),
        TestGroup::new(
            "powers of 2",
            vec![
                TestVector::exact(4, 32768),
                TestVector::exact(16, 16384),
                TestVector::exact(1024, 2048),
                TestVector::exact(65536, 256),
                TestVector::exact(1048576, 64),
            ],
        ),
        TestGroup::new(
            "general cases (10% tolerance)",
            vec![
                TestVector::approx(100, 6554),
                TestVector::approx(2, 46341),
                TestVector::approx(10, 20723),
                TestVector::approx(42, 10103),
                TestVector::approx(12345, 590),
                TestVector::approx(1000000, 66),
                TestVector::approx(2000000000, 1),
            ],
        ),
    ]
}
