use std::path::PathBuf;

use clap::Args;

#[derive(Debug, Clone, Default, Args)]
pub struct CheckArgs {
    /// TOML file with tolerance and test vectors
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Allowed error in percent of the expected value (overrides the config file)
    #[arg(long)]
    pub margin_percent: Option<u32>,
    /// Absolute error allowed when the percentage margin rounds to zero
    #[arg(long)]
    pub floor: Option<u32>,
    /// Print the summary as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}
