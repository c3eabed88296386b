use super::{AnnealState, AnnealStats, Annealer};
use crate::distance::DistanceProvider;
use crate::route::Route;
use serde::Serialize;
use tracing::{debug, info};

/// A trait for receiving updates after each temperature level.
/// Boolean return value indicates if the run should continue (true) or stop (false).
pub trait ProgressCallback {
    fn on_progress(&self, step: usize, temperature: f64, current: f64, best: f64) -> bool;
}

pub struct SilentProgress;

impl ProgressCallback for SilentProgress {
    fn on_progress(&self, _step: usize, _temperature: f64, _current: f64, _best: f64) -> bool {
        true
    }
}

impl<F> ProgressCallback for F
where
    F: Fn(usize, f64, f64, f64) -> bool,
{
    fn on_progress(&self, step: usize, temperature: f64, current: f64, best: f64) -> bool {
        self(step, temperature, current, best)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnnealOutcome {
    pub route: Route,
    pub length: f64,
    pub initial_length: f64,
    pub final_temperature: f64,
    pub stats: AnnealStats,
    pub stopped_early: bool,
}

impl<P: DistanceProvider + ?Sized> Annealer<'_, P> {
    /// Cools until the floor is reached and returns the best tour seen.
    pub fn run<CB: ProgressCallback>(mut self, callback: CB) -> AnnealOutcome {
        let planned = self.schedule.expected_steps();
        let trials = self.params.trials_per_temperature;
        let resync_interval = self.params.resync_interval;
        let log_every = (planned / 20).max(1);
        let mut stopped_early = false;

        info!(
            cities = self.route.len(),
            levels = planned,
            trials_per_level = trials,
            incremental = self.incremental,
            "Annealing started (initial length {:.3})",
            self.initial_length
        );

        if self.route.len() < 2 {
            debug!("Fewer than two cities, nothing to anneal");
        } else {
            while self.state() == AnnealState::Cooling {
                let (accepted, _) = self.evolve(trials);
                let temperature = self.temperature();
                let step = self.schedule.steps_taken() + 1;
                self.cool();

                if resync_interval > 0 && step % resync_interval == 0 {
                    let drift = self.resync();
                    if drift != 0.0 {
                        debug!(step, drift, "Corrected running length");
                    }
                }

                if step % log_every == 0 {
                    debug!(
                        "Step {:6} | T: {:10.3} | Accepted: {:6} | Current: {:.3} | Best: {:.3}",
                        step, temperature, accepted, self.length, self.best_length
                    );
                }

                if !callback.on_progress(step, temperature, self.length, self.best_length) {
                    stopped_early = true;
                    break;
                }
            }
        }

        // drop accumulated rounding from the incremental deltas
        self.best_length = self.best_route.length(self.provider);

        info!(
            steps = self.stats.temperature_steps,
            accepted = self.stats.accepted,
            "Annealing finished (best length {:.3})",
            self.best_length
        );

        AnnealOutcome {
            final_temperature: self.temperature(),
            length: self.best_length,
            initial_length: self.initial_length,
            route: self.best_route,
            stats: self.stats,
            stopped_early,
        }
    }
}
