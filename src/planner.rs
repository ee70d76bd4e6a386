use crate::algorithm::{Algorithm, AlgorithmEnum, AntColony, Swarm};
use crate::error::{Error, Result};
use crate::tsp::{Tour, Tsp};
use crate::utils::config::Config;
use std::fmt;
use std::rc::Rc;
use std::time::Instant;


pub struct Planner {
    pub algorithm: AlgorithmEnum,
    pub tsp: Rc<Tsp>,
    pub config: Config,
}

#[derive(Clone, Debug)]
pub struct Outcome {
    pub algorithm: &'static str,
    pub agents: usize,
    pub seed: u64,
    pub iterations: u64,
    pub length: f64,
    pub target_length: Option<f64>,
    pub tour: Tour,
    /// computing time in μs
    pub elapsed: u128,
}


impl Planner {
    pub fn new(tsp: Tsp, config: Config) -> Result<Self> {
        let tsp = Rc::new(tsp);
        let algorithm: AlgorithmEnum = match config.algorithm.as_str() {
            "aco" => AntColony::new(Rc::clone(&tsp), config.aco.clone(), config.seed)?.into(),
            "pso" => Swarm::new(Rc::clone(&tsp), config.pso.clone(), config.seed)?.into(),
            other => return Err(Error::UnknownAlgorithm(other.to_owned())),
        };
        Ok(Planner { algorithm, tsp, config })
    }
    pub fn plan(&mut self) -> Outcome {
        let start = Instant::now();
        let length = self.algorithm.run();
        let elapsed = start.elapsed().as_micros();
        let target_length = match &self.algorithm {
            AlgorithmEnum::Swarm(_) => self.config.pso.target_length,
            AlgorithmEnum::AntColony(_) => None,
        };
        Outcome {
            algorithm: self.algorithm.name(),
            agents: self.algorithm.agents(),
            seed: self.algorithm.seed(),
            iterations: self.algorithm.iterations(),
            length,
            target_length,
            tour: self.algorithm.best_tour(),
            elapsed,
        }
    }
}

impl Outcome {
    pub fn target_reached(&self) -> Option<bool> {
        self.target_length.map(|target| self.length <= target)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} with {} agents, seed {}", self.algorithm, self.agents, self.seed)?;
        writeln!(f, "- stopped after {} iterations in {} μs", self.iterations, self.elapsed)?;
        match (self.target_length, self.target_reached()) {
            (Some(target), Some(reached)) => {
                let outcome = if reached { "reached" } else { "missed" };
                writeln!(f, "- tour length {:.2}, target {:.2} {}", self.length, target, outcome)?;
            }
            _ => writeln!(f, "- tour length {:.2}", self.length)?,
        }
        writeln!(f, "- shortest path: {}", self.tour)
    }
}
