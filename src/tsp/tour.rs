use std::fmt;
use itertools::Itertools;


/// Visiting order over target ids, rendered as a closed loop.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tour(pub Vec<usize>);

impl Tour {
    pub fn cities(&self) -> &[usize] {
        &self.0
    }
    /// Whether the order visits each of `0..n` exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        is_permutation(&self.0, n)
    }
}

impl From<&[usize]> for Tour {
    fn from(cities: &[usize]) -> Self {
        Tour(cities.to_vec())
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.first() {
            Some(first) => write!(f, "{} -> {}", self.0.iter().join(" -> "), first),
            None        => write!(f, "(empty)"),
        }
    }
}

pub fn is_permutation(cities: &[usize], n: usize) -> bool {
    if cities.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in cities {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}
