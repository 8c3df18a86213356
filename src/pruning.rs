//! Survivor selection
//!
//! This module provides the dedup/filter/rank/truncate step that produces
//! each generation's surviving population.

use std::collections::HashSet;

use crate::population::{Individual, Population};

/// Survivor pruner
///
/// Applied to the fitness-scored union of the previous survivors and the new
/// offspring, in order:
///
/// 1. stable sort by fitness, descending
/// 2. drop exact content duplicates; the scan keeps the first (and therefore
///    highest-fitness) occurrence of each list
/// 3. drop individuals carrying internally duplicated titles
/// 4. drop individuals whose titles match an unwanted entry (case-sensitive
///    substring)
/// 5. truncate to the population ceiling
///
/// Lists containing favorite titles are deliberately NOT dropped: favorites
/// feed the preference profile and excluding them would work against it.
#[derive(Clone, Debug)]
pub struct SurvivorPruner {
    /// Population ceiling after pruning
    pub max_population_size: usize,
    /// Title fragments that disqualify a list
    pub unwanted_titles: Vec<String>,
}

impl SurvivorPruner {
    /// Create a pruner with the given ceiling and unwanted titles
    ///
    /// Empty unwanted entries are discarded; an empty fragment would match
    /// every title.
    pub fn new(max_population_size: usize, unwanted_titles: Vec<String>) -> Self {
        Self {
            max_population_size,
            unwanted_titles: unwanted_titles
                .into_iter()
                .filter(|t| !t.trim().is_empty())
                .collect(),
        }
    }

    /// Check whether an individual passes the content filters
    fn is_admissible(&self, individual: &Individual) -> bool {
        !individual.has_duplicate_titles()
            && !self
                .unwanted_titles
                .iter()
                .any(|t| individual.any_title_contains(t))
    }

    /// Prune a scored population down to the surviving set, best first
    pub fn prune(&self, combined: Population) -> Population {
        let generation = combined.generation();
        let mut ranked = combined;
        ranked.sort_by_fitness();

        let mut seen = HashSet::new();
        let mut survivors: Vec<Individual> = Vec::new();
        for individual in ranked.into_individuals() {
            if survivors.len() == self.max_population_size {
                break;
            }
            if seen.insert(individual.fingerprint()) && self.is_admissible(&individual) {
                survivors.push(individual);
            }
        }

        let mut population = Population::from_individuals(survivors);
        population.set_generation(generation);
        population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieRecord;
    use std::collections::BTreeSet;

    fn movie(title: &str) -> MovieRecord {
        MovieRecord::new(title, BTreeSet::new(), 100)
    }

    fn scored(titles: &[&str], fitness: f64) -> Individual {
        Individual::with_fitness(titles.iter().map(|t| movie(t)).collect(), fitness)
    }

    fn pruner(max: usize) -> SurvivorPruner {
        SurvivorPruner::new(max, Vec::new())
    }

    #[test]
    fn test_survivors_ranked_best_first_and_truncated() {
        let combined = Population::from_individuals(vec![
            scored(&["A", "B"], 1.0),
            scored(&["C", "D"], 3.0),
            scored(&["E", "F"], 2.0),
            scored(&["G", "H"], 0.5),
        ]);

        let survivors = pruner(3).prune(combined);
        assert_eq!(survivors.len(), 3);

        let fitnesses: Vec<f64> = survivors.iter().map(|i| i.fitness_f64()).collect();
        assert_eq!(fitnesses, vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_exact_duplicates_keep_higher_fitness_copy() {
        // Same movie multiset, different order and different recorded scores;
        // the descending scan must keep the 2.0 copy
        let combined = Population::from_individuals(vec![
            scored(&["A", "B"], 1.0),
            scored(&["B", "A"], 2.0),
        ]);

        let survivors = pruner(10).prune(combined);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].fitness_f64(), 2.0);
    }

    #[test]
    fn test_internal_duplicate_titles_are_dropped() {
        let combined = Population::from_individuals(vec![
            scored(&["A", "A"], 5.0),
            scored(&["A", "B"], 1.0),
        ]);

        let survivors = pruner(10).prune(combined);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].titles(), vec!["A", "B"]);
    }

    #[test]
    fn test_unwanted_title_substring_filter() {
        let pruner = SurvivorPruner::new(10, vec!["Good Dinosaur".to_string()]);
        let combined = Population::from_individuals(vec![
            scored(&["The Good Dinosaur", "Heat"], 9.0),
            scored(&["Heat", "Ronin"], 1.0),
        ]);

        let survivors = pruner.prune(combined);
        assert_eq!(survivors.len(), 1);
        assert_eq!(survivors[0].titles(), vec!["Heat", "Ronin"]);
    }

    #[test]
    fn test_empty_unwanted_entries_are_ignored() {
        let pruner = SurvivorPruner::new(10, vec!["".to_string(), "  ".to_string()]);
        let combined = Population::from_individuals(vec![scored(&["Anything"], 1.0)]);

        assert_eq!(pruner.prune(combined).len(), 1);
    }

    #[test]
    fn test_favorite_titles_survive() {
        // No favorite-based exclusion exists: a list carrying a favorite is
        // a good list, not a disqualified one
        let pruner = SurvivorPruner::new(10, vec!["Unwanted".to_string()]);
        let combined = Population::from_individuals(vec![scored(&["Megamind", "Heat"], 4.0)]);

        let survivors = pruner.prune(combined);
        assert_eq!(survivors.len(), 1);
    }

    #[test]
    fn test_prune_preserves_generation_counter() {
        let mut combined = Population::from_individuals(vec![scored(&["A"], 1.0)]);
        combined.set_generation(7);
        assert_eq!(pruner(5).prune(combined).generation(), 7);
    }

    #[test]
    fn test_prune_can_empty_a_population() {
        let pruner = SurvivorPruner::new(10, vec!["A".to_string()]);
        let combined = Population::from_individuals(vec![scored(&["A"], 1.0)]);
        assert!(pruner.prune(combined).is_empty());
    }

    #[test]
    fn test_equal_fitness_keeps_prior_population_first() {
        // Stable sort: on ties, individuals listed earlier (the previous
        // survivors, by engine convention) outrank offspring
        let combined = Population::from_individuals(vec![
            scored(&["Old", "List"], 2.0),
            scored(&["New", "List"], 2.0),
            scored(&["Other", "List"], 2.0),
        ]);

        let survivors = pruner(2).prune(combined);
        assert_eq!(survivors[0].titles(), vec!["Old", "List"]);
        assert_eq!(survivors[1].titles(), vec!["New", "List"]);
    }
}
