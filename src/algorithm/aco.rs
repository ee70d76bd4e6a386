use std::rc::Rc;
use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use serde::Deserialize;
use tracing::{debug, info};
use crate::tsp::{Tour, Tsp, EPSILON};
use crate::utils::error::{check_range, Error, Result};
use super::Algorithm;
use super::algorithm::seed_or_now;
use super::base::ants::Ant;
use super::base::grid::Grid;


/// 費洛蒙蒸發後的下限，避免任何一條邊永遠走不到
pub const MIN_PHEROMONE: f64 = 1e-6;


#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct AcoParams {
    pub ants: usize,
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub initial_pheromone: f64,
    /// 0 means no bound on iterations.
    pub max_iterations: u64,
    pub max_tours: u64,
}

impl Default for AcoParams {
    fn default() -> Self {
        AcoParams {
            ants: 10,
            alpha: 1.0,
            beta: 1.0,
            rho: 0.2,
            initial_pheromone: 1.0,
            max_iterations: 0,
            max_tours: 10000,
        }
    }
}

impl AcoParams {
    pub fn validate(&self) -> Result<()> {
        if self.ants == 0 {
            return Err(Error::NoAgents("ants"));
        }
        check_range("alpha", self.alpha, self.alpha >= 0.0, ">= 0")?;
        check_range("beta", self.beta, self.beta >= 0.0, ">= 0")?;
        check_range("rho", self.rho, self.rho > 0.0 && self.rho < 1.0, "in (0, 1)")?;
        check_range("initial_pheromone", self.initial_pheromone,
                    self.initial_pheromone >= MIN_PHEROMONE, ">= 1e-6")?;
        check_range("max_tours", self.max_tours as f64, self.max_tours > 0, "> 0")?;
        Ok(())
    }
}


pub struct AntColony {
    tsp: Rc<Tsp>,
    params: AcoParams,
    pheromone: Grid,
    heuristic: Grid,
    probability: Grid,
    rng: ChaChaRng,
    seed: u64,
    iterations: u64,
    tours: u64,
    best_ant: Option<Ant>,
    history: Vec<f64>,
}

impl AntColony {
    pub fn new(tsp: Rc<Tsp>, params: AcoParams, seed: Option<u64>) -> Result<Self> {
        params.validate()?;
        let n = tsp.len();
        let seed = seed_or_now(seed);
        let mut colony = AntColony {
            pheromone: Grid::new(n, params.initial_pheromone),
            heuristic: Grid::new(n, 0.0),
            probability: Grid::new(n, 0.0),
            rng: ChaChaRng::seed_from_u64(seed),
            seed,
            iterations: 0,
            tours: 0,
            best_ant: None,
            history: vec![],
            tsp,
            params,
        };
        colony.initialize_heuristic();
        Ok(colony)
    }
    pub fn params(&self) -> &AcoParams {
        &self.params
    }
    pub fn pheromone(&self) -> &Grid {
        &self.pheromone
    }
    pub fn tours(&self) -> u64 {
        self.tours
    }
    /// Repeats whole iterations until the iteration or tour budget runs out.
    pub fn optimize(&mut self) -> f64 {
        info!(cities = self.tsp.len(), ants = self.params.ants, seed = self.seed, "ant colony starts");
        loop {
            self.iterate();
            if self.termination_condition() {
                break;
            }
        }
        info!(iterations = self.iterations, tours = self.tours,
              best = self.best_length(), "ant colony stops");
        self.best_length()
    }
    pub fn iterate(&mut self) {
        self.calculate_probability();
        let mut colony = self.create_colony();
        for ant in colony.iter_mut() {
            self.construct(ant);
            ant.length(&self.tsp);
            self.tours += 1;
        }

        // 同長度時保留先找到的
        let local_best = colony.iter().min_by_key(|ant| OrderedFloat(ant.length));
        if let Some(ant) = local_best {
            if ant.length < self.best_length() {
                info!(iteration = self.iterations, length = ant.length, "new best tour");
                self.best_ant = Some(ant.clone());
            }
        }

        self.evaporate_pheromone();
        self.deposit_pheromone(&colony);
        self.iterations += 1;
        self.history.push(self.best_length());
        debug!(iteration = self.iterations, tours = self.tours, best = self.best_length());
    }
    fn initialize_heuristic(&mut self) {
        let tsp = &self.tsp;
        self.heuristic = Grid::from_fn(tsp.len(), |i, j| match i == j {
            true  => 0.0,
            false => 1.0 / tsp.distance(i, j).max(EPSILON),
        });
    }
    fn calculate_probability(&mut self) {
        let (alpha, beta) = (self.params.alpha, self.params.beta);
        let pheromone = &self.pheromone;
        let heuristic = &self.heuristic;
        self.probability = Grid::from_fn(pheromone.len(), |i, j| {
            pheromone[(i, j)].powf(alpha) * heuristic[(i, j)].powf(beta)
        });
    }
    fn create_colony(&mut self) -> Vec<Ant> {
        let n = self.tsp.len();
        let rng = &mut self.rng;
        (0..self.params.ants)
            .map(|_| Ant::new(n, rng.gen_range(0..n)))
            .collect()
    }
    fn construct(&mut self, ant: &mut Ant) {
        while !ant.is_complete() {
            let row = self.probability.row(ant.current());
            let next = ant.choose_next(row, &mut self.rng);
            ant.record_step(next);
        }
    }
    fn evaporate_pheromone(&mut self) {
        debug_assert!(self.params.rho < 1.0);
        let keep = 1.0 - self.params.rho;
        for pheromone in self.pheromone.cells_mut() {
            *pheromone = f64::max(*pheromone * keep, MIN_PHEROMONE);
        }
    }
    fn add_pheromone(&mut self, i: usize, j: usize, delta: f64) {
        self.pheromone[(i, j)] += delta;
        self.pheromone[(j, i)] += delta;
    }
    fn deposit_pheromone(&mut self, colony: &[Ant]) {
        for ant in colony {
            debug_assert!(ant.length.is_sign_positive());
            let delta = 1.0 / ant.length.max(EPSILON);
            for (i, j) in ant.edges() {
                self.add_pheromone(i, j, delta);
            }
        }
    }
    fn termination_condition(&self) -> bool {
        let by_iterations = self.params.max_iterations > 0
            && self.iterations >= self.params.max_iterations;
        by_iterations || self.tours >= self.params.max_tours
    }
}

impl Algorithm for AntColony {
    fn run(&mut self) -> f64 {
        self.optimize()
    }
    fn name(&self) -> &'static str {
        "aco"
    }
    fn agents(&self) -> usize {
        self.params.ants
    }
    fn seed(&self) -> u64 {
        self.seed
    }
    fn iterations(&self) -> u64 {
        self.iterations
    }
    fn best_tour(&self) -> Tour {
        self.best_ant.as_ref()
            .map(|ant| Tour::from(ant.tour.as_slice()))
            .unwrap_or_default()
    }
    fn best_length(&self) -> f64 {
        self.best_ant.as_ref()
            .map_or(f64::INFINITY, |ant| ant.length)
    }
    fn history(&self) -> &[f64] {
        &self.history
    }
}
