//! Run statistics
//!
//! This module provides statistics collection for evolution runs.

use serde::{Deserialize, Serialize};

use crate::fitness::FitnessRecord;
use crate::population::Population;

/// Fitness distribution of one generation's surviving population
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number (1-based; recorded after pruning)
    pub generation: usize,
    /// Best fitness among survivors
    pub best_fitness: f64,
    /// Arithmetic mean fitness among survivors
    pub mean_fitness: f64,
    /// Worst fitness among survivors
    pub worst_fitness: f64,
}

impl GenerationStats {
    /// Compute statistics from a scored population
    pub fn from_population(population: &Population, generation: usize) -> Self {
        let scores: Vec<f64> = population.iter().filter_map(|i| i.fitness).collect();

        if scores.is_empty() {
            return Self {
                generation,
                best_fitness: f64::NEG_INFINITY,
                mean_fitness: 0.0,
                worst_fitness: f64::INFINITY,
            };
        }

        let best = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let worst = scores.iter().cloned().fold(f64::INFINITY, f64::min);
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;

        Self {
            generation,
            best_fitness: best,
            mean_fitness: mean,
            worst_fitness: worst,
        }
    }
}

/// Append-only statistics history for an entire run
///
/// One entry per generation; entries are never mutated once recorded.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation, in order
    pub generations: Vec<GenerationStats>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the history of best fitness values
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of mean fitness values
    pub fn mean_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_fitness).collect()
    }

    /// Get the history of worst fitness values
    pub fn worst_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.worst_fitness).collect()
    }

    /// Get the final best fitness
    pub fn final_best_fitness(&self) -> Option<f64> {
        self.generations.last().map(|g| g.best_fitness)
    }

    /// Get a summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Evolution Summary:\n\
             - Generations: {}\n\
             - Final best: {:.4}\n\
             - Final mean: {:.4}\n\
             - Final worst: {:.4}",
            self.num_generations(),
            self.generations
                .last()
                .map_or(f64::NEG_INFINITY, |g| g.best_fitness),
            self.generations.last().map_or(0.0, |g| g.mean_fitness),
            self.generations
                .last()
                .map_or(f64::INFINITY, |g| g.worst_fitness),
        )
    }
}

/// Result of an evolution run
#[derive(Clone, Debug)]
pub struct EvolutionResult {
    /// The final population, best individual first
    pub population: Population,
    /// Fitness records of the final population, in population order
    pub rankings: Vec<FitnessRecord>,
    /// Per-generation fitness history
    pub stats: EvolutionStats,
}

impl EvolutionResult {
    /// The best surviving fitness record, if any individual survived
    pub fn best(&self) -> Option<&FitnessRecord> {
        self.rankings.first()
    }
}
