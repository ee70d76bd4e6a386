mod tsp;
mod tour;
pub mod layout;

pub use tsp::{Coordinate, Tsp, Unit, EPSILON};
pub use tour::{is_permutation, Tour};
