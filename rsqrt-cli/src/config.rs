//! Suite configuration loaded from TOML.
//!
//! ```toml
//! [tolerance]
//! margin_percent = 10
//! floor = 2
//!
//! [[group]]
//! title = "custom"
//!
//! [[group.vector]]
//! input = 100
//! approx = 6554
//! ```
//!
//! A file without groups runs the default suite with its own tolerance.

use std::path::Path;

use anyhow::{Context, Result, bail};
use rsqrt_check::{Expectation, TestGroup, TestVector, Tolerance, default_suite};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteConfig {
    #[serde(default)]
    pub tolerance: Tolerance,
    #[serde(default, rename = "group")]
    pub groups: Vec<GroupConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    pub title: String,
    #[serde(default, rename = "vector")]
    pub vectors: Vec<VectorConfig>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VectorConfig {
    pub input: u32,
    pub name: Option<String>,
    pub exact: Option<u32>,
    pub approx: Option<u32>,
}

impl VectorConfig {
    fn into_vector(self, group: &str) -> Result<TestVector> {
        let expect = match (self.exact, self.approx) {
            (Some(v), None) => Expectation::Exact(v),
            (None, Some(v)) => Expectation::Approx(v),
            _ => bail!(
                "Vector rsqrt({}) in group '{}' must set exactly one of `exact` or `approx`",
                self.input,
                group
            ),
        };
        let vector = TestVector::new(self.input, expect);
        Ok(match self.name {
            Some(name) => vector.with_name(name),
            None => vector,
        })
    }
}

impl SuiteConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config")
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("In config file {}", path.display()))
    }

    /// Build the groups to run; the default suite when none are configured
    pub fn into_groups(self) -> Result<Vec<TestGroup>> {
        if self.groups.is_empty() {
            return Ok(default_suite());
        }

        self.groups
            .into_iter()
            .map(|group| {
                let title = group.title;
                let vectors = group
                    .vectors
                    .into_iter()
                    .map(|v| v.into_vector(&title))
                    .collect::<Result<Vec<_>>>()?;
                Ok(TestGroup::new(title, vectors))
            })
            .collect()
    }
}
