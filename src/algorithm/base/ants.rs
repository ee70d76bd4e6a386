use rand::Rng;
use rand::seq::SliceRandom;
use tracing::trace;
use crate::tsp::Tsp;
use super::roulette;


/// 一隻螞蟻只活一輪：建好路徑、算完長度、留下費洛蒙後就被丟棄
#[derive(Clone, Debug)]
pub struct Ant {
    pub tour: Vec<usize>,
    pub length: f64,
    visited: Vec<bool>,
}

impl Ant {
    pub fn new(n: usize, start: usize) -> Self {
        debug_assert!(start < n);
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut tour = Vec::with_capacity(n);
        tour.push(start);
        Ant { tour, length: f64::INFINITY, visited }
    }
    pub fn current(&self) -> usize {
        *self.tour.last().expect("an ant always holds its start city")
    }
    pub fn has_visited(&self, city: usize) -> bool {
        self.visited[city]
    }
    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.visited.len()
    }
    /// Samples the next city from the current city's row of choice weights.
    /// Visited cities weigh zero; a row with no usable weight falls back to a
    /// uniform pick among the unvisited ones.
    pub fn choose_next<R: Rng>(&self, row: &[f64], rng: &mut R) -> usize {
        debug_assert_eq!(row.len(), self.visited.len());
        debug_assert!(!self.is_complete());
        let weights: Vec<f64> = row.iter()
            .zip(self.visited.iter())
            .map(|(&w, &seen)| if seen { 0.0 } else { w })
            .collect();
        match roulette::spin(&weights, rng) {
            Some(next) => next,
            None => {
                trace!(from = self.current(), "degenerate choice row, picking uniformly");
                let unvisited: Vec<usize> = (0..self.visited.len())
                    .filter(|&city| !self.visited[city])
                    .collect();
                *unvisited.choose(rng).expect("an incomplete tour has an unvisited city")
            }
        }
    }
    pub fn record_step(&mut self, city: usize) {
        debug_assert!(!self.visited[city]);
        self.visited[city] = true;
        self.tour.push(city);
    }
    /// Scores the closed tour and keeps the result on the ant.
    pub fn length(&mut self, tsp: &Tsp) -> f64 {
        self.length = tsp.tour_length(&self.tour);
        self.length
    }
    /// Edges of the closed tour, the return edge included.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.tour.len();
        (0..n).map(move |k| (self.tour[k], self.tour[(k + 1) % n]))
    }
}
