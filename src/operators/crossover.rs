//! Crossover operator
//!
//! This module provides single-point tail-swap crossover for movie lists.

use rand::Rng;

use crate::operators::traits::CrossoverOperator;
use crate::population::Individual;

/// Single-point tail-swap crossover
///
/// Chooses a cut point uniformly from `[1, min(len) − 1]` and exchanges the
/// parents' tails: `child1 = p1[..point] + p2[point..]` and vice versa.
/// Children may contain duplicate titles; the survivor pruner filters those.
///
/// Pairs where either parent is empty, or where `min(len)` is 1, have no
/// valid cut point and are skipped rather than sampled from an empty range.
#[derive(Clone, Debug, Default)]
pub struct TailSwapCrossover;

impl TailSwapCrossover {
    /// Create a new tail-swap crossover operator
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for TailSwapCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Option<(Individual, Individual)> {
        let min_len = parent1.len().min(parent2.len());
        if min_len <= 1 {
            return None;
        }

        let point = rng.gen_range(1..min_len);

        let mut child1 = parent1.movies()[..point].to_vec();
        child1.extend_from_slice(&parent2.movies()[point..]);

        let mut child2 = parent2.movies()[..point].to_vec();
        child2.extend_from_slice(&parent1.movies()[point..]);

        Some((Individual::new(child1), Individual::new(child2)))
    }
}
