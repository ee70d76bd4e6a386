use swarm_tour::utils::config::Config;
use swarm_tour::utils::yaml;
use swarm_tour::{Algorithm, Planner};

fn setup(algorithm: &str) -> Config {
    let mut config = yaml::load_config("data/config/default.yaml").unwrap();
    config.algorithm = algorithm.to_owned();
    config
}

#[test]
fn it_runs_aco() {
    let tsp = yaml::load_targets("data/targets/square.yaml").unwrap();
    let mut planner = Planner::new(tsp, setup("aco")).unwrap();
    let outcome = planner.plan();
    assert!(outcome.length <= 4.05);
    assert!(outcome.tour.is_permutation_of(4));
    assert_eq!(outcome.iterations, 100);
}

#[test]
fn it_runs_pso() {
    let tsp = yaml::load_targets("data/targets/square.yaml").unwrap();
    let mut planner = Planner::new(tsp, setup("pso")).unwrap();
    let outcome = planner.plan();
    assert!(outcome.length <= 4.05);
    assert!(outcome.tour.is_permutation_of(4));
}

#[test]
fn it_plans_plant_field() {
    // two rows of five plants, 1 m apart along a row and 1.5 m between rows
    let optimum = 1100.0;
    for &name in &["aco", "pso"] {
        let tsp = yaml::load_targets("data/targets/plants.yaml").unwrap();
        let mut planner = Planner::new(tsp, setup(name)).unwrap();
        let outcome = planner.plan();
        assert!(outcome.tour.is_permutation_of(10));
        assert!(outcome.length >= optimum - 1e-6);
        let history = planner.algorithm.history();
        assert!(history.windows(2).all(|w| w[1] <= w[0]));
        if name == "aco" {
            assert!(outcome.length <= optimum * 1.1, "length = {}", outcome.length);
        }
    }
}

#[test]
fn it_replays_with_same_seed() {
    let run = |name: &str| {
        let tsp = yaml::load_targets("data/targets/plants.yaml").unwrap();
        let mut planner = Planner::new(tsp, setup(name)).unwrap();
        planner.plan();
        planner.algorithm.history().to_vec()
    };
    assert_eq!(run("aco"), run("aco"));
    assert_eq!(run("pso"), run("pso"));
}

#[test]
fn it_runs_without_seed() {
    let config = yaml::load_config("data/config/time_seeded.yaml").unwrap();
    assert_eq!(config.seed, None);
    let tsp = yaml::load_targets("data/targets/square.yaml").unwrap();
    let mut planner = Planner::new(tsp, config).unwrap();
    let outcome = planner.plan();
    assert!(outcome.tour.is_permutation_of(4));
}
