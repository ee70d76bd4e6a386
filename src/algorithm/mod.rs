mod base;
mod aco;
mod pso;
mod algorithm;

pub use algorithm::{seed_or_now, Algorithm, AlgorithmEnum};
pub use aco::{AcoParams, AntColony, MIN_PHEROMONE};
pub use pso::{PsoParams, Swarm};
pub use base::ants::Ant;
pub use base::grid::Grid;
pub use base::particle::{Particle, Trust};
pub use base::swaps::{swap_sequence, repair};
