use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("at least 2 targets are required, got {0}")]
    TooFewTargets(usize),
    #[error("the number of {0} must be positive")]
    NoAgents(&'static str),
    #[error("parameter {name} = {value} is out of range, expected {expected}")]
    OutOfRange { name: &'static str, value: f64, expected: &'static str },
    #[error("unknown algorithm `{0}`, expected `aco` or `pso`")]
    UnknownAlgorithm(String),
    #[error("targets file holds neither points nor a layout")]
    NoTargets,
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn check_range(name: &'static str, value: f64, ok: bool, expected: &'static str) -> Result<()> {
    match ok && value.is_finite() {
        true  => Ok(()),
        false => Err(Error::OutOfRange { name, value, expected }),
    }
}
