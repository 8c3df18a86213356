//! Individual wrapper type
//!
//! This module provides the Individual type that wraps one candidate movie
//! list with its fitness.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::catalog::MovieRecord;

/// One candidate movie list
///
/// An ordered sequence of catalog records plus the fitness computed for it.
/// Crossover and mutation may transiently introduce duplicate titles; only
/// the survivor pruner enforces distinctness, so `has_duplicate_titles` is a
/// query, not an invariant, until an individual survives pruning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// The movies in this list, in order
    pub movies: Vec<MovieRecord>,
    /// The fitness value (None if not yet evaluated)
    pub fitness: Option<f64>,
}

impl Individual {
    /// Create a new unevaluated individual
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self {
            movies,
            fitness: None,
        }
    }

    /// Create an individual with a known fitness
    pub fn with_fitness(movies: Vec<MovieRecord>, fitness: f64) -> Self {
        Self {
            movies,
            fitness: Some(fitness),
        }
    }

    /// Number of movies in the list
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Get the movie records
    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Titles of the movies in list order
    pub fn titles(&self) -> Vec<&str> {
        self.movies.iter().map(|m| m.title.as_str()).collect()
    }

    /// Check if this individual has been evaluated
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Get the fitness value, panicking if not evaluated
    pub fn fitness_f64(&self) -> f64 {
        self.fitness.expect("Individual has not been evaluated")
    }

    /// Set the fitness value
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Drop any cached fitness so the next evaluation recomputes it
    pub fn clear_fitness(&mut self) {
        self.fitness = None;
    }

    /// Check whether two or more movies in the list share a title
    pub fn has_duplicate_titles(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.movies.len());
        self.movies.iter().any(|m| !seen.insert(m.title.as_str()))
    }

    /// Check whether any movie title contains the given fragment
    ///
    /// Matching is a case-sensitive substring test, the same contract the
    /// unwanted-title filter uses.
    pub fn any_title_contains(&self, fragment: &str) -> bool {
        !fragment.is_empty() && self.movies.iter().any(|m| m.title.contains(fragment))
    }

    /// Order-insensitive content fingerprint
    ///
    /// Two individuals holding the same multiset of records fingerprint
    /// identically even when the lists are ordered differently; the pruner
    /// uses this for exact-duplicate detection.
    pub fn fingerprint(&self) -> u64 {
        let mut movie_hashes: Vec<u64> = self
            .movies
            .iter()
            .map(|m| {
                let mut hasher = DefaultHasher::new();
                m.hash(&mut hasher);
                hasher.finish()
            })
            .collect();
        movie_hashes.sort_unstable();

        let mut hasher = DefaultHasher::new();
        movie_hashes.hash(&mut hasher);
        hasher.finish()
    }

    /// Check if this individual is better than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self.fitness, other.fitness) {
            (Some(f1), Some(f2)) => f1 > f2,
            (Some(_), None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn movie(title: &str) -> MovieRecord {
        MovieRecord::new(title, BTreeSet::from(["Drama".to_string()]), 100)
    }

    #[test]
    fn test_individual_new_is_unevaluated() {
        let individual = Individual::new(vec![movie("A"), movie("B")]);
        assert!(!individual.is_evaluated());
        assert_eq!(individual.len(), 2);
        assert_eq!(individual.titles(), vec!["A", "B"]);
    }

    #[test]
    fn test_set_and_clear_fitness() {
        let mut individual = Individual::new(vec![movie("A")]);
        individual.set_fitness(1.5);
        assert!(individual.is_evaluated());
        assert_eq!(individual.fitness_f64(), 1.5);

        individual.clear_fitness();
        assert!(!individual.is_evaluated());
    }

    #[test]
    #[should_panic(expected = "has not been evaluated")]
    fn test_fitness_f64_panics_when_unevaluated() {
        Individual::new(vec![movie("A")]).fitness_f64();
    }

    #[test]
    fn test_duplicate_title_detection() {
        let clean = Individual::new(vec![movie("A"), movie("B")]);
        assert!(!clean.has_duplicate_titles());

        let dirty = Individual::new(vec![movie("A"), movie("B"), movie("A")]);
        assert!(dirty.has_duplicate_titles());
    }

    #[test]
    fn test_any_title_contains_substring() {
        let individual = Individual::new(vec![movie("The Good Dinosaur"), movie("Heat")]);
        assert!(individual.any_title_contains("Good Dinosaur"));
        assert!(individual.any_title_contains("Heat"));
        assert!(!individual.any_title_contains("good dinosaur")); // case-sensitive
        assert!(!individual.any_title_contains(""));
    }

    #[test]
    fn test_fingerprint_order_insensitive() {
        let forward = Individual::new(vec![movie("A"), movie("B")]);
        let backward = Individual::new(vec![movie("B"), movie("A")]);
        assert_eq!(forward.fingerprint(), backward.fingerprint());

        let other = Individual::new(vec![movie("A"), movie("C")]);
        assert_ne!(forward.fingerprint(), other.fingerprint());
    }

    #[test]
    fn test_fingerprint_ignores_fitness() {
        let unevaluated = Individual::new(vec![movie("A")]);
        let evaluated = Individual::with_fitness(vec![movie("A")], 3.0);
        assert_eq!(unevaluated.fingerprint(), evaluated.fingerprint());
    }

    #[test]
    fn test_is_better_than() {
        let strong = Individual::with_fitness(vec![movie("A")], 2.0);
        let weak = Individual::with_fitness(vec![movie("B")], 1.0);
        let unevaluated = Individual::new(vec![movie("C")]);

        assert!(strong.is_better_than(&weak));
        assert!(!weak.is_better_than(&strong));
        assert!(strong.is_better_than(&unevaluated));
        assert!(!unevaluated.is_better_than(&strong));
    }
}
