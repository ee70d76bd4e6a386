use std::fs;

use serde::Deserialize;

use super::config::Config;
use super::error::{Error, Result};
use crate::tsp::layout::{plant_targets, PlantLayout};
use crate::tsp::{Coordinate, Tsp, Unit};

#[derive(Deserialize)]
struct TargetsYaml {
    #[serde(default)]
    unit: Unit,
    points: Option<Vec<Coordinate>>,
    layout: Option<PlantLayout>,
}

pub fn load_config(path: &str) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    let yaml = serde_yaml::from_str(&text)?;
    Ok(yaml)
}

pub fn load_targets(path: &str) -> Result<Tsp> {
    let text = fs::read_to_string(path)?;
    parse_targets(&text)
}

/// 明確列出的座標優先於植物網格
pub fn parse_targets(text: &str) -> Result<Tsp> {
    let yaml: TargetsYaml = serde_yaml::from_str(text)?;
    let coords = match (yaml.points, yaml.layout) {
        (Some(points), _)      => points,
        (None, Some(layout))   => plant_targets(&layout)?,
        (None, None)           => return Err(Error::NoTargets),
    };
    Tsp::with_unit(coords, yaml.unit)
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_points() {
        let tsp = parse_targets("points: [[0, 0], [0, 1], [1, 1]]").unwrap();
        assert_eq!(tsp.len(), 3);
        assert_eq!(tsp.coords()[2], Coordinate::new(1.0, 1.0));
    }
    #[test]
    fn it_parses_layout_in_unit() {
        let text = "
unit: cm
layout:
  center: [0, 0]
  distances: [1, 1]
  grid: [2, 2]
  quantity: 4
";
        let tsp = parse_targets(text).unwrap();
        assert_eq!(tsp.len(), 4);
        assert!((tsp.tour_length(&[0, 1, 2, 3]) - 400.0).abs() < 1e-9);
    }
    #[test]
    fn it_reports_bad_targets() {
        assert!(matches!(parse_targets("unit: m"), Err(Error::NoTargets)));
        assert!(matches!(parse_targets("points: [[0, 0]]"), Err(Error::TooFewTargets(1))));
        assert!(matches!(parse_targets("points: 3"), Err(Error::Yaml(_))));
        assert!(matches!(load_targets("no/such/file.yaml"), Err(Error::Io(_))));
    }
}
