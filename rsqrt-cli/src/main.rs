use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rsqrt_cli::check::{CheckArgs, handle_check};
use rsqrt_cli::eval::{EvalArgs, handle_eval};
use rsqrt_cli::table::handle_table;

#[derive(Parser)]
#[command(name = "rsqrt")]
#[command(about = "Fixed-point reciprocal square root: verification and diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the verification suite
    Check(CheckArgs),
    /// Show stage-by-stage estimates for inputs
    Eval(EvalArgs),
    /// Print the initial estimate table
    Table,
}

fn main() -> Result<ExitCode> {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        Commands::Check(args) => {
            if handle_check(args, &mut out)? {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Eval(args) => {
            handle_eval(args, &mut out)?;
            ExitCode::SUCCESS
        }
        Commands::Table => {
            handle_table(&mut out)?;
            ExitCode::SUCCESS
        }
    };

    out.flush()?;
    Ok(code)
}
