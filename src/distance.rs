use crate::error::{TspError, TspResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Pairwise distances between cities `0..city_count()`.
///
/// Implementations must answer `distance` in O(1). Nothing checks that
/// the diagonal is zero or that values are finite.
pub trait DistanceProvider {
    fn city_count(&self) -> usize;

    fn distance(&self, from: usize, to: usize) -> f64;

    /// When true, `distance(a, b) == distance(b, a)` for every pair, which
    /// lets the annealer price a reversal from its two boundary edges.
    fn is_symmetric(&self) -> bool {
        true
    }
}

/// Euclidean distances computed on demand from coordinates.
#[derive(Debug, Clone)]
pub struct EuclideanDistance {
    points: Vec<Point>,
}

impl EuclideanDistance {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl DistanceProvider for EuclideanDistance {
    fn city_count(&self) -> usize {
        self.points.len()
    }

    #[inline(always)]
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.points[from].distance_to(&self.points[to])
    }
}

/// A dense `N x N` matrix, flattened row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
    symmetric: bool,
}

impl DistanceMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> TspResult<Self> {
        let size = rows.len();
        let mut values = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TspError::Validation(format!(
                    "matrix is not square: row {} has {} values, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            values.extend(row);
        }
        Ok(Self::from_flat(size, values))
    }

    /// Precomputes every Euclidean distance between `points`.
    pub fn from_points(points: &[Point]) -> Self {
        let size = points.len();
        let mut values = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = points[i].distance_to(&points[j]);
                values[i * size + j] = d;
                values[j * size + i] = d;
            }
        }
        Self {
            size,
            values,
            symmetric: true,
        }
    }

    fn from_flat(size: usize, values: Vec<f64>) -> Self {
        let mut symmetric = true;
        'outer: for i in 0..size {
            for j in (i + 1)..size {
                if values[i * size + j] != values[j * size + i] {
                    symmetric = false;
                    break 'outer;
                }
            }
        }
        Self {
            size,
            values,
            symmetric,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }
}

impl DistanceProvider for DistanceMatrix {
    fn city_count(&self) -> usize {
        self.size
    }

    #[inline(always)]
    fn distance(&self, from: usize, to: usize) -> f64 {
        self.values[from * self.size + to]
    }

    fn is_symmetric(&self) -> bool {
        self.symmetric
    }
}
