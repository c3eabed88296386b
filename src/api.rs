use crate::config::{AnnealParams, InitialTour};
use crate::construct;
use crate::distance::{DistanceMatrix, DistanceProvider, EuclideanDistance, Point};
use crate::error::{TspError, TspResult};
use crate::loader;
use crate::optimizer::{AnnealStats, Annealer, ProgressCallback};
use crate::route::Route;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use strum_macros::Display;
use tracing::{debug, info};

/// Where the solver takes its distances from.
#[derive(Debug, Clone)]
pub enum DistanceSource {
    Euclidean(EuclideanDistance),
    Matrix(DistanceMatrix),
}

impl DistanceProvider for DistanceSource {
    fn city_count(&self) -> usize {
        match self {
            Self::Euclidean(e) => e.city_count(),
            Self::Matrix(m) => m.city_count(),
        }
    }

    #[inline(always)]
    fn distance(&self, from: usize, to: usize) -> f64 {
        match self {
            Self::Euclidean(e) => e.distance(from, to),
            Self::Matrix(m) => m.distance(from, to),
        }
    }

    fn is_symmetric(&self) -> bool {
        match self {
            Self::Euclidean(e) => e.is_symmetric(),
            Self::Matrix(m) => m.is_symmetric(),
        }
    }
}

/// A loaded instance: distances plus, when known, the city coordinates.
#[derive(Debug, Clone)]
pub struct Problem {
    pub distances: DistanceSource,
    pub coordinates: Option<Vec<Point>>,
}

impl Problem {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self {
            distances: DistanceSource::Euclidean(EuclideanDistance::new(points.clone())),
            coordinates: Some(points),
        }
    }

    pub fn from_matrix(matrix: DistanceMatrix) -> Self {
        Self {
            distances: DistanceSource::Matrix(matrix),
            coordinates: None,
        }
    }

    /// Attaches coordinates for reporting. Distances are left untouched.
    pub fn with_coordinates(mut self, points: Vec<Point>) -> TspResult<Self> {
        if points.len() != self.city_count() {
            return Err(TspError::Validation(format!(
                "{} coordinates given for {} cities",
                points.len(),
                self.city_count()
            )));
        }
        self.coordinates = Some(points);
        Ok(self)
    }

    /// A matrix, when given, always supplies the distances.
    pub fn from_files(coords: Option<&Path>, matrix: Option<&Path>) -> TspResult<Self> {
        match (coords, matrix) {
            (Some(c), Some(m)) => {
                let points = loader::load_coordinates(c)?;
                let matrix = loader::load_matrix(m)?;
                debug!("Using matrix distances, coordinates kept for export");
                Self::from_matrix(matrix).with_coordinates(points)
            }
            (Some(c), None) => Ok(Self::from_points(loader::load_coordinates(c)?)),
            (None, Some(m)) => Ok(Self::from_matrix(loader::load_matrix(m)?)),
            (None, None) => Err(TspError::Config(
                "no input given: pass --coords and/or --matrix".to_string(),
            )),
        }
    }

    pub fn city_count(&self) -> usize {
        self.distances.city_count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Method {
    NearestNeighbor,
    SimulatedAnnealing,
}

#[derive(Debug, Clone, Serialize)]
pub struct Solution {
    pub method: Method,
    pub route: Route,
    pub length: f64,
    pub initial_length: f64,
    pub elapsed_secs: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<AnnealStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_temperature: Option<f64>,
    pub stopped_early: bool,
}

impl Solution {
    /// Relative gain over the starting tour, in percent.
    pub fn improvement_pct(&self) -> f64 {
        if self.initial_length > 0.0 {
            (self.initial_length - self.length) / self.initial_length * 100.0
        } else {
            0.0
        }
    }
}

pub fn solve_annealing<CB: ProgressCallback>(
    problem: &Problem,
    params: &AnnealParams,
    initial: InitialTour,
    seed: Option<u64>,
    progress: CB,
) -> TspResult<Solution> {
    let provider = &problem.distances;
    info!(
        cities = problem.city_count(),
        init = %initial,
        "Solving with simulated annealing"
    );

    let start = Instant::now();
    let annealer = match initial {
        InitialTour::Random => Annealer::new(provider, params.clone(), seed)?,
        InitialTour::NearestNeighbor => {
            let route = construct::nearest_neighbor(provider, 0)?;
            Annealer::with_route(provider, params.clone(), route, seed)?
        }
    };
    let outcome = annealer.run(progress);
    let elapsed_secs = start.elapsed().as_secs_f64();

    Ok(Solution {
        method: Method::SimulatedAnnealing,
        route: outcome.route,
        length: outcome.length,
        initial_length: outcome.initial_length,
        elapsed_secs,
        stats: Some(outcome.stats),
        final_temperature: Some(outcome.final_temperature),
        stopped_early: outcome.stopped_early,
    })
}

pub fn solve_nearest_neighbor(problem: &Problem, start: usize) -> TspResult<Solution> {
    let provider = &problem.distances;
    info!(cities = problem.city_count(), start, "Solving with nearest neighbor");

    let timer = Instant::now();
    let route = construct::nearest_neighbor(provider, start)?;
    let length = route.length(provider);
    let elapsed_secs = timer.elapsed().as_secs_f64();

    Ok(Solution {
        method: Method::NearestNeighbor,
        route,
        length,
        initial_length: length,
        elapsed_secs,
        stats: None,
        final_temperature: None,
        stopped_early: false,
    })
}
