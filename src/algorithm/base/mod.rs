pub mod ants;
pub mod grid;
pub mod particle;
pub mod roulette;
pub mod swaps;
