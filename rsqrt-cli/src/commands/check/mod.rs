//! `rsqrt check`: run the verification suite.

mod args;

pub use args::CheckArgs;

use std::io::Write;

use anyhow::{Context, Result};
use rsqrt_builtins::fast_rsqrt;
use rsqrt_check::{InstantCounter, IoSink, SuiteRunner, Tolerance, VecSink};

use crate::config::SuiteConfig;

/// Run the suite and write the report to `out`.
///
/// Returns whether every check passed.
pub fn handle_check(args: CheckArgs, out: &mut dyn Write) -> Result<bool> {
    let config = match &args.config {
        Some(path) => SuiteConfig::load(path)?,
        None => SuiteConfig::default(),
    };

    let defaults = &config.tolerance;
    let tolerance = Tolerance::new(
        args.margin_percent.unwrap_or(defaults.margin_percent),
        args.floor.unwrap_or(defaults.floor),
    );
    let groups = config.into_groups()?;
    log::info!(
        "Running {} vectors in {} groups, tolerance {}% (floor {})",
        groups.iter().map(|g| g.vectors.len()).sum::<usize>(),
        groups.len(),
        tolerance.margin_percent,
        tolerance.floor
    );

    let counter = InstantCounter::new();
    let runner = SuiteRunner::new(counter).with_tolerance(tolerance);

    let summary = if args.json {
        // Report text is discarded; the summary carries the same data
        let mut sink = VecSink::new();
        let summary = runner.run(&groups, fast_rsqrt, &mut sink)?;
        serde_json::to_writer_pretty(&mut *out, &summary)
            .context("Failed to write JSON summary")?;
        writeln!(out)?;
        summary
    } else {
        let mut sink = IoSink::new(&mut *out);
        let summary = runner.run(&groups, fast_rsqrt, &mut sink)?;
        sink.flush()?;
        summary
    };

    if !summary.all_passed() {
        log::error!(
            "{} of {} checks failed",
            summary.failed,
            summary.outcomes.len()
        );
    }

    Ok(summary.all_passed())
}
