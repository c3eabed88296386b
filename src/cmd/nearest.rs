use super::OutputArgs;
use crate::reports;
use clap::Args;
use tsp_anneal::api::{self, Problem};
use tsp_anneal::error::TspResult;

#[derive(Args, Debug, Clone)]
pub struct NearestArgs {
    /// City the tour starts from.
    #[arg(long, default_value_t = 0)]
    pub start: usize,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: NearestArgs, problem: &Problem) -> TspResult<()> {
    let solution = api::solve_nearest_neighbor(problem, args.start)?;
    reports::emit(&solution, problem, &args.output)
}
