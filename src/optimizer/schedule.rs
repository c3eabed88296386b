/// Geometric cooling: `T_{k+1} = rate * T_k`, stopping once `T <= floor`.
///
/// Iterating yields every temperature level the annealer runs trials at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureSchedule {
    current: f64,
    cooling_rate: f64,
    floor: f64,
    steps: usize,
}

impl TemperatureSchedule {
    pub fn new(initial: f64, cooling_rate: f64, floor: f64) -> Self {
        Self {
            current: initial,
            cooling_rate,
            floor,
            steps: 0,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn steps_taken(&self) -> usize {
        self.steps
    }

    pub fn is_done(&self) -> bool {
        self.current <= self.floor
    }

    /// Applies one cooling step and returns the new temperature.
    pub fn cool(&mut self) -> f64 {
        self.current *= self.cooling_rate;
        self.steps += 1;
        self.current
    }

    /// Levels remaining from the current temperature:
    /// `ceil(ln(floor / T) / ln(rate))`.
    pub fn expected_steps(&self) -> usize {
        if self.is_done() || !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return 0;
        }
        ((self.floor / self.current).ln() / self.cooling_rate.ln()).ceil() as usize
    }
}

impl Iterator for TemperatureSchedule {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.is_done() {
            return None;
        }
        let t = self.current;
        self.cool();
        Some(t)
    }
}
