use crate::error::{TspError, TspResult};
use crate::optimizer::schedule::TemperatureSchedule;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

/// Cooling schedule and trial budget for the annealing engine.
///
/// The defaults reproduce the reference run: start at 10 000, decay by
/// 0.999 per level, 12 000 trials per level, stop at 1.0.
#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealParams {
    #[arg(long, default_value_t = 10_000.0)]
    pub initial_temperature: f64,

    /// Multiplicative decay applied after each temperature level, in (0, 1).
    #[arg(long, default_value_t = 0.999)]
    pub cooling_rate: f64,

    #[arg(long, default_value_t = 12_000)]
    pub trials_per_temperature: usize,

    /// The run ends once the temperature is at or below this value.
    #[arg(long, default_value_t = 1.0)]
    pub temperature_floor: f64,

    /// Recompute the exact tour length every N temperature levels (0 = never).
    #[arg(long, default_value_t = 1)]
    pub resync_interval: usize,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            cooling_rate: 0.999,
            trials_per_temperature: 12_000,
            temperature_floor: 1.0,
            resync_interval: 1,
        }
    }
}

impl AnnealParams {
    pub fn new(initial_temperature: f64, cooling_rate: f64, trials_per_temperature: usize) -> Self {
        Self {
            initial_temperature,
            cooling_rate,
            trials_per_temperature,
            ..Default::default()
        }
    }

    pub fn with_floor(mut self, temperature_floor: f64) -> Self {
        self.temperature_floor = temperature_floor;
        self
    }

    pub fn with_resync_interval(mut self, resync_interval: usize) -> Self {
        self.resync_interval = resync_interval;
        self
    }

    pub fn validate(&self) -> TspResult<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(TspError::Config(format!(
                "initial_temperature must be positive, got {}",
                self.initial_temperature
            )));
        }
        if !self.temperature_floor.is_finite() || self.temperature_floor <= 0.0 {
            return Err(TspError::Config(format!(
                "temperature_floor must be positive, got {}",
                self.temperature_floor
            )));
        }
        if self.temperature_floor >= self.initial_temperature {
            return Err(TspError::Config(format!(
                "temperature_floor ({}) must be below initial_temperature ({})",
                self.temperature_floor, self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(TspError::Config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.trials_per_temperature == 0 {
            return Err(TspError::Config(
                "trials_per_temperature must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn schedule(&self) -> TemperatureSchedule {
        TemperatureSchedule::new(
            self.initial_temperature,
            self.cooling_rate,
            self.temperature_floor,
        )
    }

    /// Number of temperature levels a full run visits.
    pub fn expected_steps(&self) -> usize {
        self.schedule().expected_steps()
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TspResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| TspError::io(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Overlays only the values the user typed on the command line.
    pub fn merge_from_cli(&mut self, cli_params: &AnnealParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_params.$field;
                }
            };
        }

        update_if_present!(initial_temperature);
        update_if_present!(cooling_rate);
        update_if_present!(trials_per_temperature);
        update_if_present!(temperature_floor);
        update_if_present!(resync_interval);
    }
}

/// How the annealer builds its starting tour.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InitialTour {
    #[default]
    Random,
    NearestNeighbor,
}
