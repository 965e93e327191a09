//! rsqrt command-line library.
//!
//! This library exposes the CLI functionality for use in tests and as a library.
//! It provides:
//! - `check`: run the verification suite and report pass/fail
//! - `eval`: show the stage-by-stage estimates for given inputs
//! - `table`: dump the initial estimate table

pub mod commands;
pub mod config;
pub mod input;

pub use commands::{check, eval, table};
