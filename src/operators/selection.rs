//! Selection operator
//!
//! This module provides uniform pairwise parent selection.

use rand::Rng;

use crate::operators::traits::PairSelector;
use crate::population::Population;

/// Uniform pairwise selection
///
/// Visits every unordered pair `(i, j)` with `i < j` and keeps it as a parent
/// pair when one uniform draw in `[0, 1)` lands at or below the crossover
/// probability. Pairing is independent of fitness; an individual may appear
/// in zero, one, or many pairs, and the pass is O(n²) in population size.
#[derive(Clone, Debug)]
pub struct UniformPairSelector {
    /// Per-pair acceptance probability
    pub crossover_probability: f64,
}

impl UniformPairSelector {
    /// Create a selector with the given per-pair probability
    pub fn new(crossover_probability: f64) -> Self {
        Self {
            crossover_probability,
        }
    }
}

impl PairSelector for UniformPairSelector {
    fn select_pairs<R: Rng>(&self, population: &Population, rng: &mut R) -> Vec<(usize, usize)> {
        // Zero probability selects nothing and consumes no randomness
        if self.crossover_probability <= 0.0 {
            return Vec::new();
        }

        let n = population.len();
        let mut pairs = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen::<f64>() <= self.crossover_probability {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}
