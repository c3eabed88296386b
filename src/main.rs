use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{error, Level};
use tsp_anneal::api::Problem;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Whitespace-separated `x y` file, one city per line.
    #[arg(global = true, short, long)]
    coords: Option<PathBuf>,

    /// Whitespace-separated N x N distance matrix.
    #[arg(global = true, short, long)]
    matrix: Option<PathBuf>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Improve a tour with simulated annealing over segment reversals.
    Anneal(cmd::anneal::AnnealArgs),
    /// Build a greedy nearest-neighbor tour.
    Nearest(cmd::nearest::NearestArgs),
}

fn main() {
    // raw matches let the subcommand tell typed flags apart from defaults
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let problem = Problem::from_files(cli.coords.as_deref(), cli.matrix.as_deref())
        .unwrap_or_else(|e| {
            error!("❌ {}", e);
            process::exit(1);
        });

    let result = match cli.command {
        Commands::Anneal(args) => {
            let Some(sub_matches) = matches.subcommand_matches("anneal") else {
                unreachable!("clap dispatched the anneal subcommand")
            };
            cmd::anneal::run(args, sub_matches, &problem)
        }
        Commands::Nearest(args) => cmd::nearest::run(args, &problem),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
