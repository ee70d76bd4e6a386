use serde::Deserialize;
use super::Coordinate;
use crate::utils::error::{check_range, Result};


/// Margin kept off the far edge of the plant field.
const MARGIN: f64 = 0.5;


#[derive(Clone, Debug, Deserialize)]
pub struct PlantLayout {
    pub center: [f64; 2],
    pub distances: [f64; 2],
    pub grid: [usize; 2],
    pub quantity: usize,
}

/// 以蛇行順序在網格上排出植物的座標，第一株位於左下角
pub fn plant_targets(layout: &PlantLayout) -> Result<Vec<Coordinate>> {
    let [cols, rows] = layout.grid;
    let [dx, dy] = layout.distances;
    check_range("grid columns", cols as f64, cols > 0, "> 0")?;
    check_range("distances.x", dx, dx >= 0.0, ">= 0")?;
    check_range("distances.y", dy, dy >= 0.0, ">= 0")?;

    let width = cols as f64 * dx - MARGIN;
    let height = rows as f64 * dy - MARGIN;
    let mut x = layout.center[0] - width / 2.0;
    let mut y = layout.center[1] - height / 2.0;

    let mut targets = Vec::with_capacity(layout.quantity);
    for t in 0..layout.quantity {
        targets.push(Coordinate::new(x, y));
        let (row, col) = (t / cols, t % cols);
        if col == cols - 1 {
            y += dy;
        } else if row % 2 == 0 {
            x += dx;
        } else {
            x -= dx;
        }
    }
    Ok(targets)
}
