//! Operator traits
//!
//! This module defines the seams between the generation loop and its
//! stochastic operators. Every method takes the run's random source
//! explicitly so that seeded runs reproduce exactly.

use rand::Rng;

use crate::catalog::Catalog;
use crate::population::{Individual, Population};

/// Parent-pair selection operator
///
/// Proposes pairs of population indices for crossover. Selection here carries
/// no fitness pressure in this engine; ranking happens at survivor pruning.
pub trait PairSelector {
    /// Propose parent pairs as index pairs into the population
    fn select_pairs<R: Rng>(&self, population: &Population, rng: &mut R) -> Vec<(usize, usize)>;
}

/// Crossover operator
///
/// Recombines two parents into two children, or declines the pair.
pub trait CrossoverOperator {
    /// Produce two children from two parents
    ///
    /// Returns `None` for degenerate pairs (a recoverable, expected
    /// condition), never an error.
    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Option<(Individual, Individual)>;
}

/// Mutation operator
///
/// Perturbs an offspring in place, drawing replacement material from the
/// catalog.
pub trait MutationOperator {
    /// Apply mutation to an individual in place
    fn mutate<R: Rng>(&self, individual: &mut Individual, catalog: &Catalog, rng: &mut R);
}
