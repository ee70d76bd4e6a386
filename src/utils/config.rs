use serde::Deserialize;
use argh::FromArgs;
use crate::algorithm::{AcoParams, PsoParams};

/// Plans a visiting order over spatial targets with an ant colony or a particle swarm
#[derive(FromArgs)]
pub struct Arguments {
    /// path to targets file
    #[argh(positional)]
    pub targets: String,
    /// path to configuration file
    #[argh(option, short='c', default="String::from(\"data/config/default.yaml\")")]
    pub config: String,
    /// override algorithm used to plan the tour, `aco` or `pso`
    #[argh(option, short='a')]
    pub algorithm: Option<String>,
    /// override random seed of the chosen algorithm
    #[argh(option, short='s')]
    pub seed: Option<u64>,
    /// override number of ants or particles
    #[argh(option, short='n')]
    pub agents: Option<usize>,
    /// override tour length at which the swarm stops early
    #[argh(option, short='t')]
    pub target_length: Option<f64>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_name")]
    pub name: String,
    pub algorithm: String,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub aco: AcoParams,
    #[serde(default)]
    pub pso: PsoParams,
}

fn default_name() -> String {
    String::from("default")
}

impl Config {
    pub fn override_from_args(&mut self, args: &Arguments) {
        if let Some(algorithm) = &args.algorithm {
            self.algorithm = algorithm.to_lowercase();
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(agents) = args.agents {
            match self.algorithm.as_str() {
                "pso" => self.pso.particles = agents,
                _     => self.aco.ants = agents,
            }
        }
        if let Some(target) = args.target_length {
            let target = num::clamp(target, 0.0, f64::MAX);
            self.pso.target_length = Some(target);
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn args(algorithm: Option<&str>, agents: Option<usize>) -> Arguments {
        Arguments {
            targets: String::from("data/targets/square.yaml"),
            config: String::from("data/config/default.yaml"),
            algorithm: algorithm.map(String::from),
            seed: Some(7),
            agents,
            target_length: Some(-3.0),
        }
    }

    #[test]
    fn it_overrides_from_args() {
        let mut config: Config = serde_yaml::from_str("algorithm: aco").unwrap();
        assert_eq!(config.name, "default");
        assert_eq!(config.seed, None);
        assert_eq!(config.aco, AcoParams::default());

        config.override_from_args(&args(Some("PSO"), Some(33)));
        assert_eq!(config.algorithm, "pso");
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.pso.particles, 33);
        assert_eq!(config.aco.ants, AcoParams::default().ants);
        assert_eq!(config.pso.target_length, Some(0.0));
    }
    #[test]
    fn agents_follow_algorithm() {
        let mut config: Config = serde_yaml::from_str("algorithm: aco").unwrap();
        config.override_from_args(&args(None, Some(4)));
        assert_eq!(config.aco.ants, 4);
        assert_eq!(config.pso.particles, PsoParams::default().particles);
    }
}
