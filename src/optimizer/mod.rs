pub mod delta;
pub mod runner;
pub mod schedule;

pub use self::runner::{AnnealOutcome, ProgressCallback, SilentProgress};
pub use self::schedule::TemperatureSchedule;

use crate::config::AnnealParams;
use crate::distance::DistanceProvider;
use crate::error::{TspError, TspResult};
use crate::route::Route;
use fastrand::Rng;
use serde::Serialize;
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AnnealState {
    Cooling,
    Done,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnnealStats {
    pub temperature_steps: usize,
    pub trials: usize,
    pub accepted: usize,
    pub improving: usize,
    pub resyncs: usize,
}

impl AnnealStats {
    pub fn acceptance_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.accepted as f64 / self.trials as f64
        }
    }
}

/// Single-trajectory simulated annealing over reversal moves.
///
/// `route`/`length` are the working tour, `best_route`/`best_length` the
/// best tour seen so far. The two never alias.
pub struct Annealer<'a, P: DistanceProvider + ?Sized> {
    provider: &'a P,
    params: AnnealParams,

    pub schedule: TemperatureSchedule,
    pub route: Route,
    pub length: f64,
    pub best_route: Route,
    pub best_length: f64,
    pub initial_length: f64,

    pub rng: Rng,
    pub stats: AnnealStats,

    // symmetric providers price a reversal from its two boundary edges
    incremental: bool,
}

impl<'a, P: DistanceProvider + ?Sized> Annealer<'a, P> {
    /// Starts from a uniformly shuffled tour.
    pub fn new(provider: &'a P, params: AnnealParams, seed: Option<u64>) -> TspResult<Self> {
        let mut rng = make_rng(seed);
        let route = Route::random(provider.city_count(), &mut rng);
        Self::build(provider, params, route, rng)
    }

    /// Starts from a caller-supplied tour, e.g. a nearest-neighbor tour.
    pub fn with_route(
        provider: &'a P,
        params: AnnealParams,
        route: Route,
        seed: Option<u64>,
    ) -> TspResult<Self> {
        if route.len() != provider.city_count() {
            return Err(TspError::Validation(format!(
                "starting route has {} cities, distance data has {}",
                route.len(),
                provider.city_count()
            )));
        }
        Self::build(provider, params, route, make_rng(seed))
    }

    fn build(provider: &'a P, params: AnnealParams, route: Route, rng: Rng) -> TspResult<Self> {
        params.validate()?;
        let length = route.length(provider);

        Ok(Self {
            provider,
            schedule: params.schedule(),
            params,
            best_route: route.clone(),
            best_length: length,
            initial_length: length,
            route,
            length,
            rng,
            stats: AnnealStats::default(),
            incremental: provider.is_symmetric(),
        })
    }

    pub fn params(&self) -> &AnnealParams {
        &self.params
    }

    pub fn temperature(&self) -> f64 {
        self.schedule.current()
    }

    pub fn state(&self) -> AnnealState {
        if self.schedule.is_done() {
            AnnealState::Done
        } else {
            AnnealState::Cooling
        }
    }

    pub fn uses_incremental_delta(&self) -> bool {
        self.incremental
    }

    /// Runs `trials` reversal proposals at the current temperature.
    /// Returns `(accepted, attempted)`.
    pub fn evolve(&mut self, trials: usize) -> (usize, usize) {
        let n = self.route.len();
        if n < 2 {
            return (0, 0);
        }

        let temperature = self.schedule.current();
        let mut accepted = 0;
        let mut improving = 0;

        for _ in 0..trials {
            let a = self.rng.usize(0..n);
            let b = self.rng.usize(0..n);
            let (start, end) = if a <= b { (a, b) } else { (b, a) };

            let (delta, candidate_length) = if self.incremental {
                let d = delta::reversal_delta(self.route.cities(), self.provider, start, end);
                (d, self.length + d)
            } else {
                // asymmetric: interior edges change direction, so price the
                // whole tour and undo on rejection
                self.route.reverse_segment(start, end);
                let l = self.route.length(self.provider);
                (l - self.length, l)
            };

            // Metropolis criterion
            if delta < 0.0 || self.rng.f64() < (-delta / temperature).exp() {
                if self.incremental {
                    self.route.reverse_segment(start, end);
                }
                self.length = candidate_length;
                accepted += 1;
                if delta < 0.0 {
                    improving += 1;
                }

                if self.length < self.best_length {
                    self.best_route.clone_from(&self.route);
                    self.best_length = self.length;
                }
            } else if !self.incremental {
                self.route.reverse_segment(start, end);
            }
        }

        self.stats.trials += trials;
        self.stats.accepted += accepted;
        self.stats.improving += improving;
        (accepted, trials)
    }

    /// Advances the schedule by one level and returns the new temperature.
    pub fn cool(&mut self) -> f64 {
        let t = self.schedule.cool();
        self.stats.temperature_steps = self.schedule.steps_taken();
        t
    }

    /// Replaces the running length with an exact recomputation and returns
    /// the accumulated drift.
    pub fn resync(&mut self) -> f64 {
        let exact = self.route.length(self.provider);
        let drift = self.length - exact;
        self.length = exact;
        self.stats.resyncs += 1;
        drift
    }
}

fn make_rng(seed: Option<u64>) -> Rng {
    if let Some(s) = seed {
        Rng::with_seed(s)
    } else {
        Rng::new()
    }
}
