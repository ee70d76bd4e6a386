use std::rc::Rc;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaChaRng;
use serde::Deserialize;
use tracing::{debug, info};
use crate::tsp::{Tour, Tsp};
use crate::utils::error::{check_range, Error, Result};
use super::Algorithm;
use super::algorithm::seed_or_now;
use super::base::particle::{Particle, Trust};


#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PsoParams {
    pub particles: usize,
    pub self_trust: f64,
    pub past_trust: f64,
    pub global_trust: f64,
    pub max_iterations: u64,
    /// 找到不長於此值的路徑就提早結束
    pub target_length: Option<f64>,
}

impl Default for PsoParams {
    fn default() -> Self {
        PsoParams {
            particles: 20,
            self_trust: 0.2,
            past_trust: 0.1,
            global_trust: 0.7,
            max_iterations: 500,
            target_length: None,
        }
    }
}

impl PsoParams {
    pub fn validate(&self) -> Result<()> {
        if self.particles == 0 {
            return Err(Error::NoAgents("particles"));
        }
        let unit = |t: f64| (0.0..=1.0).contains(&t);
        check_range("self_trust", self.self_trust, unit(self.self_trust), "in [0, 1]")?;
        check_range("past_trust", self.past_trust, unit(self.past_trust), "in [0, 1]")?;
        check_range("global_trust", self.global_trust, unit(self.global_trust), "in [0, 1]")?;
        check_range("max_iterations", self.max_iterations as f64, self.max_iterations > 0, "> 0")?;
        if let Some(target) = self.target_length {
            check_range("target_length", target, target >= 0.0, ">= 0")?;
        }
        Ok(())
    }
    pub fn trust(&self) -> Trust {
        Trust {
            self_trust: self.self_trust,
            past_trust: self.past_trust,
            global_trust: self.global_trust,
        }
    }
}


pub struct Swarm {
    tsp: Rc<Tsp>,
    params: PsoParams,
    particles: Vec<Particle>,
    rng: ChaChaRng,
    seed: u64,
    iterations: u64,
    best_position: Vec<usize>,
    best_length: f64,
    history: Vec<f64>,
}

impl Swarm {
    pub fn new(tsp: Rc<Tsp>, params: PsoParams, seed: Option<u64>) -> Result<Self> {
        params.validate()?;
        let seed = seed_or_now(seed);
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let particles = (0..params.particles)
            .map(|_| {
                let mut position: Vec<usize> = (0..tsp.len()).collect();
                position.shuffle(&mut rng);
                Particle::new(position)
            })
            .collect();
        Ok(Swarm {
            tsp,
            params,
            particles,
            rng,
            seed,
            iterations: 0,
            best_position: vec![],
            best_length: f64::INFINITY,
            history: vec![],
        })
    }
    pub fn params(&self) -> &PsoParams {
        &self.params
    }
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
    /// Moves the swarm until the iteration budget runs out or the best tour
    /// reaches the target length.
    pub fn solve(&mut self) -> f64 {
        info!(cities = self.tsp.len(), particles = self.params.particles, seed = self.seed, "swarm starts");
        loop {
            self.evaluate();
            self.iterations += 1;
            self.history.push(self.best_length);
            debug!(iteration = self.iterations, best = self.best_length);
            if self.termination_condition() {
                break;
            }
            self.move_particles();
        }
        info!(iterations = self.iterations, best = self.best_length,
              target = ?self.params.target_length, "swarm stops");
        self.best_length
    }
    pub fn target_reached(&self) -> bool {
        self.params.target_length
            .map_or(false, |target| self.best_length <= target)
    }
    fn evaluate(&mut self) {
        for particle in self.particles.iter_mut() {
            particle.evaluate(&self.tsp);
        }
        // 同長度時保留先找到的
        for particle in self.particles.iter() {
            if particle.best_length < self.best_length {
                info!(iteration = self.iterations, length = particle.best_length, "new best tour");
                self.best_length = particle.best_length;
                self.best_position.clone_from(&particle.best_position);
            }
        }
    }
    fn move_particles(&mut self) {
        let trust = self.params.trust();
        for particle in self.particles.iter_mut() {
            particle.update_velocity(trust, &self.best_position, &mut self.rng);
            particle.apply_velocity();
        }
    }
    fn termination_condition(&self) -> bool {
        self.iterations >= self.params.max_iterations || self.target_reached()
    }
}

impl Algorithm for Swarm {
    fn run(&mut self) -> f64 {
        self.solve()
    }
    fn name(&self) -> &'static str {
        "pso"
    }
    fn agents(&self) -> usize {
        self.params.particles
    }
    fn seed(&self) -> u64 {
        self.seed
    }
    fn iterations(&self) -> u64 {
        self.iterations
    }
    fn best_tour(&self) -> Tour {
        Tour::from(self.best_position.as_slice())
    }
    fn best_length(&self) -> f64 {
        self.best_length
    }
    fn history(&self) -> &[f64] {
        &self.history
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::tsp::{is_permutation, Coordinate};

    fn square() -> Rc<Tsp> {
        Rc::new(Tsp::new(vec![
            Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 1.0),
            Coordinate::new(1.0, 1.0), Coordinate::new(1.0, 0.0),
        ]).unwrap())
    }
    fn circle(n: usize) -> Rc<Tsp> {
        let step = 2.0 * std::f64::consts::PI / n as f64;
        Rc::new(Tsp::new((0..n)
            .map(|i| Coordinate::new((i as f64 * step).cos() * 10.0, (i as f64 * step).sin() * 10.0))
            .collect()).unwrap())
    }

    #[test]
    fn it_rejects_bad_params() {
        let bad = [
            PsoParams { particles: 0, ..Default::default() },
            PsoParams { self_trust: 1.5, ..Default::default() },
            PsoParams { past_trust: -0.1, ..Default::default() },
            PsoParams { global_trust: f64::NAN, ..Default::default() },
            PsoParams { max_iterations: 0, ..Default::default() },
            PsoParams { target_length: Some(-1.0), ..Default::default() },
        ];
        for params in bad.iter() {
            assert!(Swarm::new(square(), params.clone(), Some(1)).is_err(), "{:?}", params);
        }
    }
    #[test]
    fn it_solves_unit_square() {
        let params = PsoParams { max_iterations: 100, ..Default::default() };
        let mut pso = Swarm::new(square(), params, Some(420)).unwrap();
        let length = pso.solve();
        assert!(length <= 4.05, "length = {}", length);
        assert!(pso.best_tour().is_permutation_of(4));
    }
    #[test]
    fn it_stops_at_target() {
        let params = PsoParams { max_iterations: 1000, target_length: Some(1e6), ..Default::default() };
        let mut pso = Swarm::new(circle(8), params, Some(2)).unwrap();
        pso.solve();
        assert_eq!(pso.iterations(), 1);
        assert!(pso.target_reached());
    }
    #[test]
    fn particles_stay_permutations() {
        let params = PsoParams { max_iterations: 60, ..Default::default() };
        let mut pso = Swarm::new(circle(10), params, Some(8)).unwrap();
        pso.solve();
        for particle in pso.particles() {
            assert!(is_permutation(&particle.position, 10));
            assert!(is_permutation(&particle.best_position, 10));
        }
        assert!(pso.best_tour().is_permutation_of(10));
        assert_eq!(pso.history().len(), 60);
        assert!(pso.history().windows(2).all(|w| w[1] <= w[0]));
    }
    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let params = PsoParams { max_iterations: 40, ..Default::default() };
            let mut pso = Swarm::new(circle(9), params, Some(seed)).unwrap();
            pso.solve();
            (pso.history().to_vec(), pso.best_tour())
        };
        assert_eq!(run(5), run(5));
    }
    #[test]
    fn it_survives_identical_targets() {
        let tsp = Rc::new(Tsp::new(vec![Coordinate::new(1.0, -1.0); 4]).unwrap());
        let params = PsoParams { max_iterations: 10, ..Default::default() };
        let mut pso = Swarm::new(tsp, params, Some(1)).unwrap();
        assert_eq!(pso.solve(), 0.0);
        assert!(pso.best_tour().is_permutation_of(4));
    }
    #[test]
    fn it_handles_two_targets() {
        let tsp = Rc::new(Tsp::new(vec![
            Coordinate::new(0.0, 0.0), Coordinate::new(3.0, 4.0),
        ]).unwrap());
        let params = PsoParams { max_iterations: 3, ..Default::default() };
        let mut pso = Swarm::new(tsp, params, Some(1)).unwrap();
        assert!((pso.solve() - 10.0).abs() < 1e-12);
    }
}
