use std::time::{SystemTime, UNIX_EPOCH};
use enum_dispatch::enum_dispatch;
use tracing::warn;
use super::aco::AntColony;
use super::pso::Swarm;
use crate::tsp::Tour;


#[enum_dispatch]
pub enum AlgorithmEnum {
    AntColony,
    Swarm,
}

#[enum_dispatch(AlgorithmEnum)]
pub trait Algorithm {
    /// Runs the search until its budget is spent and returns the best length.
    fn run(&mut self) -> f64;
    fn name(&self) -> &'static str;
    fn agents(&self) -> usize;
    fn seed(&self) -> u64;
    fn iterations(&self) -> u64;
    fn best_tour(&self) -> Tour;
    fn best_length(&self) -> f64;
    /// Best length known after each iteration.
    fn history(&self) -> &[f64];
}


/// 有給定種子就照用，沒有才拿時鐘當種子
pub fn seed_or_now(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or_default();
            warn!(seed = nanos, "no seed given, seeding from the clock");
            nanos
        }
    }
}
