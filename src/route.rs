use crate::distance::DistanceProvider;
use crate::error::{TspError, TspResult};
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed tour: every city `0..N` exactly once, last city wired back to
/// the first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    cities: Vec<usize>,
}

impl Route {
    pub fn identity(n: usize) -> Self {
        Self {
            cities: (0..n).collect(),
        }
    }

    /// Uniformly random permutation of `0..n`.
    pub fn random(n: usize, rng: &mut Rng) -> Self {
        let mut route = Self::identity(n);
        route.shuffle(rng);
        route
    }

    /// Checks that `cities` is a permutation of `0..cities.len()`.
    pub fn from_cities(cities: Vec<usize>) -> TspResult<Self> {
        let n = cities.len();
        let mut seen = vec![false; n];
        for &c in &cities {
            if c >= n || seen[c] {
                return Err(TspError::Validation(format!(
                    "route is not a permutation of 0..{}: city {} is out of range or repeated",
                    n, c
                )));
            }
            seen[c] = true;
        }
        Ok(Self { cities })
    }

    pub(crate) fn from_cities_unchecked(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// Fisher-Yates: position `i` swaps with a uniform pick from `[0, i]`.
    pub fn shuffle(&mut self, rng: &mut Rng) {
        for i in (1..self.cities.len()).rev() {
            let j = rng.usize(0..=i);
            self.cities.swap(i, j);
        }
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }

    /// Total cycle length including the closing edge. Tours of fewer than
    /// two cities have length zero.
    pub fn length<P: DistanceProvider + ?Sized>(&self, provider: &P) -> f64 {
        let n = self.cities.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for pair in self.cities.windows(2) {
            total += provider.distance(pair[0], pair[1]);
        }
        total + provider.distance(self.cities[n - 1], self.cities[0])
    }

    /// Reverses positions `start..=end` in place.
    ///
    /// # Panics
    ///
    /// Panics unless `start <= end < len()`.
    #[inline(always)]
    pub fn reverse_segment(&mut self, start: usize, end: usize) {
        assert!(
            start <= end && end < self.cities.len(),
            "invalid segment [{}, {}] for route of {} cities",
            start,
            end,
            self.cities.len()
        );
        self.cities[start..=end].reverse();
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for c in &self.cities {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
            first = false;
        }
        Ok(())
    }
}
