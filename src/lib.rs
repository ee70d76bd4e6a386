pub mod algorithm;
pub mod planner;
pub mod tsp;
pub mod utils;

pub use utils::error;

pub use algorithm::{Algorithm, AlgorithmEnum, AntColony, Swarm};
pub use planner::{Outcome, Planner};
pub use tsp::{Coordinate, Tour, Tsp};
