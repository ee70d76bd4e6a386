use rand::Rng;
use crate::tsp::Tsp;
use super::swaps::{self, Swap};


/// Independent weights of the three pulls on a particle, each read as the
/// chance of keeping one swap of the matching influence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trust {
    pub self_trust: f64,
    pub past_trust: f64,
    pub global_trust: f64,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec<usize>,
    pub velocity: Vec<Swap>,
    pub length: f64,
    pub best_position: Vec<usize>,
    pub best_length: f64,
}

impl Particle {
    pub fn new(position: Vec<usize>) -> Self {
        Particle {
            best_position: position.clone(),
            position,
            velocity: vec![],
            length: f64::INFINITY,
            best_length: f64::INFINITY,
        }
    }
    /// Scores the current position; returns whether the personal best moved.
    pub fn evaluate(&mut self, tsp: &Tsp) -> bool {
        self.length = tsp.tour_length(&self.position);
        if self.length < self.best_length {
            self.best_length = self.length;
            self.best_position.clone_from(&self.position);
            true
        } else {
            false
        }
    }
    pub fn update_velocity<R: Rng>(&mut self, trust: Trust, global_best: &[usize], rng: &mut R) {
        let inertia = self.velocity.iter().cloned()
            .filter(|_| rng.gen_bool(trust.self_trust))
            .collect::<Vec<_>>();
        let past = swaps::swap_sequence(&self.position, &self.best_position).into_iter()
            .filter(|_| rng.gen_bool(trust.past_trust))
            .collect::<Vec<_>>();
        let global = swaps::swap_sequence(&self.position, global_best).into_iter()
            .filter(|_| rng.gen_bool(trust.global_trust))
            .collect::<Vec<_>>();

        let mut velocity = inertia;
        velocity.extend(past);
        velocity.extend(global);
        // 粒子停在最佳解上時，依自身信任度隨機擾動一次
        let n = self.position.len();
        if velocity.is_empty() && n > 1 && rng.gen_bool(trust.self_trust) {
            let i = rng.gen_range(0..n);
            let j = (i + rng.gen_range(1..n)) % n;
            velocity.push((i, j));
        }
        self.velocity = velocity;
    }
    pub fn apply_velocity(&mut self) {
        let n = self.position.len();
        swaps::apply(&mut self.position, &self.velocity);
        swaps::repair(&mut self.position, n);
    }
}
