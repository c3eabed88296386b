use clap::Args;
use std::path::PathBuf;

pub mod anneal;
pub mod nearest;

/// Output options shared by every solver subcommand.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Print the solution as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Write the tour as `order,city,x,y` CSV (needs coordinates).
    #[arg(long)]
    pub export: Option<PathBuf>,
}
