//! Mutation operator
//!
//! This module provides single-slot replacement mutation.

use rand::Rng;

use crate::catalog::Catalog;
use crate::operators::traits::MutationOperator;
use crate::population::Individual;

/// Single-slot replacement mutation
///
/// With the configured probability, replaces exactly one uniformly chosen
/// slot with a fresh, unconstrained draw from the catalog. The draw may
/// reintroduce a title already present elsewhere in the list; such internal
/// duplicates are caught by the survivor pruner, not prevented here.
#[derive(Clone, Debug)]
pub struct SlotReplacementMutator {
    /// Per-individual mutation probability
    pub mutation_probability: f64,
}

impl SlotReplacementMutator {
    /// Create a mutator with the given per-individual probability
    pub fn new(mutation_probability: f64) -> Self {
        Self {
            mutation_probability,
        }
    }
}

impl MutationOperator for SlotReplacementMutator {
    fn mutate<R: Rng>(&self, individual: &mut Individual, catalog: &Catalog, rng: &mut R) {
        if individual.is_empty() || self.mutation_probability <= 0.0 {
            return;
        }
        if rng.gen_bool(self.mutation_probability) {
            let slot = rng.gen_range(0..individual.len());
            if let Ok(record) = catalog.random_record(rng) {
                individual.movies[slot] = record.clone();
                individual.clear_fitness();
            }
        }
    }
}
