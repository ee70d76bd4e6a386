use std::ops::{Index, IndexMut};


/// Dense n×n matrix backed by a single buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    n: usize,
    cells: Vec<f64>,
}

impl Grid {
    pub fn new(n: usize, value: f64) -> Self {
        Grid { n, cells: vec![value; n * n] }
    }
    pub fn from_fn<F: FnMut(usize, usize) -> f64>(n: usize, mut f: F) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                cells.push(f(i, j));
            }
        }
        Grid { n, cells }
    }
    pub fn len(&self) -> usize {
        self.n
    }
    pub fn row(&self, i: usize) -> &[f64] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }
    pub fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.cells
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = f64;
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        debug_assert!(i < self.n && j < self.n);
        &self.cells[i * self.n + j]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        debug_assert!(i < self.n && j < self.n);
        &mut self.cells[i * self.n + j]
    }
}
