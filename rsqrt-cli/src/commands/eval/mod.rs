//! `rsqrt eval`: show how each stage refines the estimate.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use rsqrt_builtins::{RsqrtStages, fast_rsqrt_stages, rsqrt_reference};

use crate::input::parse_u32;

#[derive(Debug, Clone, Args)]
pub struct EvalArgs {
    /// Inputs, decimal or 0x-prefixed hex
    #[arg(required = true, value_parser = parse_input)]
    pub inputs: Vec<u32>,
}

fn parse_input(s: &str) -> Result<u32, String> {
    parse_u32(s).map_err(|e| format!("{e:#}"))
}

pub fn handle_eval(args: EvalArgs, out: &mut dyn Write) -> Result<()> {
    for (i, &x) in args.inputs.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        write_stages(out, &fast_rsqrt_stages(x))?;
    }
    Ok(())
}

fn write_stages(out: &mut dyn Write, stages: &RsqrtStages) -> Result<()> {
    writeln!(out, "rsqrt({}) = {}", stages.input, stages.result)?;
    if stages.refined {
        writeln!(out, "  table:        {}", stages.table)?;
        writeln!(out, "  interpolated: {}", stages.interpolated)?;
        for (step, y) in stages.newton.iter().enumerate() {
            writeln!(out, "  newton[{step}]:    {y}")?;
        }
    } else {
        writeln!(out, "  exact (no refinement)")?;
    }

    match rsqrt_reference(stages.input) {
        Some(reference) => writeln!(
            out,
            "  reference:    {reference} (error {})",
            stages.result.abs_diff(reference)
        )?,
        None => writeln!(out, "  reference:    infinite")?,
    }
    Ok(())
}
