use std::process;
use swarm_tour::utils::config::Arguments;
use swarm_tour::utils::yaml;
use swarm_tour::Planner;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Arguments = argh::from_env();
    if let Err(err) = run(args) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(args: Arguments) -> swarm_tour::error::Result<()> {
    let mut config = yaml::load_config(&args.config)?;
    config.override_from_args(&args);
    let tsp = yaml::load_targets(&args.targets)?;

    let mut planner = Planner::new(tsp, config)?;
    let outcome = planner.plan();
    print!("{}", outcome);
    Ok(())
}
