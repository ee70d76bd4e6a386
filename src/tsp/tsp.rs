use serde::Deserialize;
use crate::utils::error::{Error, Result};


/// Lower bound of any distance used as a denominator.
pub const EPSILON: f64 = 1e-9;


#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(from = "[f64; 2]")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    M,
    Cm,
    Mm,
}


impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Coordinate { x, y }
    }
    /// Drops the altitude of a point expressed as (x, y, z) with z up.
    pub fn from_xyz(x: f64, y: f64, _z: f64) -> Self {
        Coordinate { x, y }
    }
    pub fn distance(&self, other: &Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
    pub fn scaled(&self, factor: f64) -> Self {
        Coordinate { x: self.x * factor, y: self.y * factor }
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from(xy: [f64; 2]) -> Self {
        Coordinate::new(xy[0], xy[1])
    }
}

impl Unit {
    /// How many of this unit make up one metre.
    pub fn per_metre(&self) -> f64 {
        match self {
            Unit::M  => 1.0,
            Unit::Cm => 100.0,
            Unit::Mm => 1000.0,
        }
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::M
    }
}


/// Symmetric distance model over a fixed set of targets; target id is the
/// index into `coords`.
#[derive(Clone, Debug)]
pub struct Tsp {
    coords: Vec<Coordinate>,
    distances: Vec<f64>,
}

impl Tsp {
    pub fn new(coords: Vec<Coordinate>) -> Result<Self> {
        let n = coords.len();
        if n < 2 {
            return Err(Error::TooFewTargets(n));
        }
        let mut distances = vec![0.0; n * n];
        for i in 0..n {
            for j in i+1..n {
                let d = coords[i].distance(&coords[j]);
                distances[i * n + j] = d;
                distances[j * n + i] = d;
            }
        }
        Ok(Tsp { coords, distances })
    }
    /// Builds the model from coordinates in metres, measured in `unit`.
    pub fn with_unit(coords: Vec<Coordinate>, unit: Unit) -> Result<Self> {
        let factor = unit.per_metre();
        Tsp::new(coords.iter().map(|c| c.scaled(factor)).collect())
    }
    pub fn len(&self) -> usize {
        self.coords.len()
    }
    pub fn coords(&self) -> &[Coordinate] {
        &self.coords
    }
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.len() + j]
    }
    /// Length of the closed tour, including the edge back to the start.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        if tour.len() < 2 {
            return 0.0;
        }
        let open: f64 = tour.windows(2)
            .map(|ends| self.distance(ends[0], ends[1]))
            .sum();
        open + self.distance(tour[tour.len() - 1], tour[0])
    }
}
