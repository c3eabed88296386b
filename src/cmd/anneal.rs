use super::OutputArgs;
use crate::reports;
use clap::{ArgMatches, Args};
use std::cell::Cell;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use tsp_anneal::api::{self, Problem};
use tsp_anneal::config::{AnnealParams, InitialTour};
use tsp_anneal::error::TspResult;
use tsp_anneal::optimizer::ProgressCallback;

#[derive(Args, Debug, Clone)]
pub struct AnnealArgs {
    #[command(flatten)]
    pub params: AnnealParams,

    /// JSON file with annealing parameters; flags typed on the command line win.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "random")]
    pub init: InitialTour,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Logs a progress line at most once per interval.
struct CliProgress {
    started: Instant,
    last: Cell<Instant>,
    interval: Duration,
}

impl CliProgress {
    fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last: Cell::new(now),
            interval,
        }
    }
}

impl ProgressCallback for CliProgress {
    fn on_progress(&self, step: usize, temperature: f64, current: f64, best: f64) -> bool {
        let now = Instant::now();
        if now.duration_since(self.last.get()) >= self.interval {
            info!(
                "Step {:7} | T: {:10.3} | Current: {:.3} | Best: {:.3} | {:.1}s",
                step,
                temperature,
                current,
                best,
                now.duration_since(self.started).as_secs_f32()
            );
            self.last.set(now);
        }
        true
    }
}

pub fn run(args: AnnealArgs, matches: &ArgMatches, problem: &Problem) -> TspResult<()> {
    let params = match &args.profile {
        Some(path) => {
            info!("⚖️  Loading parameters from: {}", path.display());
            let mut file_params = AnnealParams::load_from_file(path)?;
            file_params.merge_from_cli(&args.params, matches);
            file_params
        }
        None => args.params.clone(),
    };
    params.validate()?;

    info!(
        "🔥 Annealing {} cities: T0 = {}, rate = {}, {} trials x {} levels",
        problem.city_count(),
        params.initial_temperature,
        params.cooling_rate,
        params.trials_per_temperature,
        params.expected_steps()
    );

    let progress = CliProgress::new(Duration::from_secs(2));
    let solution = api::solve_annealing(problem, &params, args.init, args.seed, progress)?;

    reports::emit(&solution, problem, &args.output)
}
