//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::fitness::{Fitness, FitnessRecord};
use crate::population::individual::Individual;

/// A population of candidate movie lists
#[derive(Clone, Debug, Default)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
    /// Current generation number
    generation: usize,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self {
            individuals,
            generation: 0,
        }
    }

    /// Sample an initial population from the catalog
    ///
    /// Each individual draws `movies_per_list` distinct records without
    /// replacement; the same record may appear in different individuals.
    pub fn sample<R: Rng>(
        catalog: &Catalog,
        size: usize,
        movies_per_list: usize,
        rng: &mut R,
    ) -> Result<Self, CatalogError> {
        let individuals = (0..size)
            .map(|_| Ok(Individual::new(catalog.sample_distinct(movies_per_list, rng)?)))
            .collect::<Result<Vec<_>, CatalogError>>()?;

        Ok(Self {
            individuals,
            generation: 0,
        })
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Evaluate every unevaluated individual with the given fitness function
    pub fn evaluate<F: Fitness>(&mut self, fitness: &F) {
        for individual in &mut self.individuals {
            if !individual.is_evaluated() {
                let score = fitness.evaluate(individual.movies());
                individual.set_fitness(score);
            }
        }
    }

    /// Drop all cached fitness values
    ///
    /// Pairing `invalidate_fitness` with `evaluate` forces a fresh scoring
    /// pass; the engine does this after pruning so survivor statistics never
    /// reuse pre-filter scores.
    pub fn invalidate_fitness(&mut self) {
        for individual in &mut self.individuals {
            individual.clear_fitness();
        }
    }

    /// Check if all individuals have been evaluated
    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(|i| i.is_evaluated())
    }

    /// Sort the population by fitness, best first
    ///
    /// The sort is stable: equal-fitness individuals keep their relative
    /// order, which keeps runs reproducible. Unevaluated individuals sink to
    /// the end.
    pub fn sort_by_fitness(&mut self) {
        self.individuals.sort_by(|a, b| {
            let fa = a.fitness.unwrap_or(f64::NEG_INFINITY);
            let fb = b.fitness.unwrap_or(f64::NEG_INFINITY);
            fb.partial_cmp(&fa).unwrap_or(std::cmp::Ordering::Equal)
        });
    }

    /// Get the best individual by fitness
    pub fn best(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .max_by(|a, b| {
                a.fitness_f64()
                    .partial_cmp(&b.fitness_f64())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Get the worst individual by fitness
    pub fn worst(&self) -> Option<&Individual> {
        self.individuals
            .iter()
            .filter(|i| i.is_evaluated())
            .min_by(|a, b| {
                a.fitness_f64()
                    .partial_cmp(&b.fitness_f64())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    /// Compute mean fitness over evaluated individuals
    pub fn mean_fitness(&self) -> Option<f64> {
        let scores: Vec<f64> = self
            .individuals
            .iter()
            .filter_map(|i| i.fitness)
            .collect();

        if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        }
    }

    /// Build fitness records for every evaluated individual, in order
    pub fn fitness_records(&self) -> Vec<FitnessRecord> {
        self.individuals
            .iter()
            .filter_map(|i| {
                i.fitness.map(|fitness| FitnessRecord {
                    individual: i.clone(),
                    fitness,
                })
            })
            .collect()
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl IntoIterator for Population {
    type Item = Individual;
    type IntoIter = std::vec::IntoIter<Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
