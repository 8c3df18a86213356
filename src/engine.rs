//! Generation loop controller
//!
//! This module implements the generational loop that drives one evolution
//! run: select, crossover, mutate, evaluate, prune, record statistics.

use log::{debug, info};
use rand::Rng;

use crate::catalog::Catalog;
use crate::config::GaConfig;
use crate::error::{EvoResult, EvolutionError};
use crate::fitness::PreferenceFitness;
use crate::operators::{
    CrossoverOperator, MutationOperator, PairSelector, SlotReplacementMutator, TailSwapCrossover,
    UniformPairSelector,
};
use crate::population::{Individual, Population};
use crate::preferences::PreferenceProfile;
use crate::pruning::SurvivorPruner;
use crate::stats::{EvolutionResult, EvolutionStats, GenerationStats};

/// Builder for [`GaEngine`]
pub struct GaEngineBuilder<'a> {
    catalog: Option<&'a Catalog>,
    preferences: Option<PreferenceProfile>,
    config: GaConfig,
}

impl<'a> GaEngineBuilder<'a> {
    /// Create a new builder with the default configuration
    pub fn new() -> Self {
        Self {
            catalog: None,
            preferences: None,
            config: GaConfig::default(),
        }
    }

    /// Set the catalog to sample from
    pub fn catalog(mut self, catalog: &'a Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Set the preference profile to optimize against
    pub fn preferences(mut self, preferences: PreferenceProfile) -> Self {
        self.preferences = Some(preferences);
        self
    }

    /// Set the run configuration
    pub fn config(mut self, config: GaConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the engine, validating the configuration up front
    pub fn build(self) -> EvoResult<GaEngine<'a>> {
        let catalog = self
            .catalog
            .ok_or_else(|| EvolutionError::Configuration("Catalog must be specified".to_string()))?;
        let preferences = self.preferences.ok_or_else(|| {
            EvolutionError::Configuration("Preference profile must be specified".to_string())
        })?;
        self.config.validate()?;

        let selector = UniformPairSelector::new(self.config.crossover_probability);
        let mutator = SlotReplacementMutator::new(self.config.mutation_probability);
        let pruner = SurvivorPruner::new(
            self.config.max_population_size,
            preferences.unwanted_titles.clone(),
        );

        Ok(GaEngine {
            catalog,
            preferences,
            config: self.config,
            selector,
            crossover: TailSwapCrossover::new(),
            mutator,
            pruner,
        })
    }
}

impl Default for GaEngineBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Genetic-algorithm engine for movie-list evolution
///
/// Owns the population for the lifetime of one run and borrows the catalog
/// read-only. The run is single-threaded and synchronous: a generation always
/// completes before control returns, and termination is by generation count
/// alone. Callers embedding this behind an interactive surface should run it
/// off the interactive path.
#[derive(Debug)]
pub struct GaEngine<'a> {
    catalog: &'a Catalog,
    preferences: PreferenceProfile,
    config: GaConfig,
    selector: UniformPairSelector,
    crossover: TailSwapCrossover,
    mutator: SlotReplacementMutator,
    pruner: SurvivorPruner,
}

impl<'a> GaEngine<'a> {
    /// Create a builder for the engine
    pub fn builder() -> GaEngineBuilder<'a> {
        GaEngineBuilder::new()
    }

    /// The preference profile this engine optimizes against
    pub fn preferences(&self) -> &PreferenceProfile {
        &self.preferences
    }

    /// The run configuration
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Run the configured number of generations
    ///
    /// All randomness flows through `rng`: a seeded generator reproduces the
    /// final population and history exactly. Fails only during
    /// initialization (catalog too small or empty); once the first
    /// generation starts, the run always completes.
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult> {
        let fitness = PreferenceFitness::new(&self.preferences);

        info!(
            "Starting evolution: {} generations, {} lists of {} movies, catalog of {}",
            self.config.generations,
            self.config.initial_population_size,
            self.config.num_movies_per_list,
            self.catalog.len()
        );

        let mut population = Population::sample(
            self.catalog,
            self.config.initial_population_size,
            self.config.num_movies_per_list,
            rng,
        )?;

        let mut stats = EvolutionStats::new();

        for generation in 1..=self.config.generations {
            let pairs = self.selector.select_pairs(&population, rng);

            let mut offspring: Vec<Individual> = Vec::with_capacity(pairs.len() * 2);
            for (i, j) in pairs {
                if let Some((child1, child2)) =
                    self.crossover.crossover(&population[i], &population[j], rng)
                {
                    offspring.push(child1);
                    offspring.push(child2);
                }
            }

            for child in &mut offspring {
                self.mutator.mutate(child, self.catalog, rng);
            }

            // Union of previous survivors and offspring, elders first so
            // stable ranking favors them on fitness ties
            let mut combined_individuals = std::mem::take(&mut population).into_individuals();
            combined_individuals.extend(offspring);
            let mut combined = Population::from_individuals(combined_individuals);
            combined.invalidate_fitness();
            combined.evaluate(&fitness);

            population = self.pruner.prune(combined);

            // Survivor scores feed the statistics and must be fresh, not the
            // pre-filter values
            population.invalidate_fitness();
            population.evaluate(&fitness);
            population.set_generation(generation);

            let generation_stats = GenerationStats::from_population(&population, generation);
            debug!(
                "Generation {generation}: {} survivors, best {:.4}, mean {:.4}, worst {:.4}",
                population.len(),
                generation_stats.best_fitness,
                generation_stats.mean_fitness,
                generation_stats.worst_fitness
            );
            stats.record(generation_stats);
        }

        info!(
            "Evolution finished: final best {:.4}",
            stats.final_best_fitness().unwrap_or(f64::NEG_INFINITY)
        );

        let rankings = population.fitness_records();
        Ok(EvolutionResult {
            population,
            rankings,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MovieRecord;
    use crate::error::{CatalogError, PreferenceError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn test_catalog() -> Catalog {
        let genres = ["Action", "Comedy", "Drama"];
        Catalog::from_records(
            (0..12)
                .map(|i| {
                    MovieRecord::new(
                        format!("Movie {i}"),
                        BTreeSet::from([genres[i % 3].to_string()]),
                        80 + 5 * i as u32,
                    )
                })
                .collect(),
        )
    }

    fn small_config() -> GaConfig {
        GaConfig {
            generations: 5,
            crossover_probability: 0.8,
            mutation_probability: 0.3,
            initial_population_size: 6,
            max_population_size: 8,
            num_movies_per_list: 3,
        }
    }

    fn action_profile() -> PreferenceProfile {
        PreferenceProfile::new(100).with_genres(vec!["Action".to_string()])
    }

    #[test]
    fn test_builder_requires_catalog_and_preferences() {
        let err = GaEngine::builder().build().unwrap_err();
        assert!(err.to_string().contains("Catalog"));

        let catalog = test_catalog();
        let err = GaEngine::builder().catalog(&catalog).build().unwrap_err();
        assert!(err.to_string().contains("Preference profile"));
    }

    #[test]
    fn test_builder_rejects_invalid_config() {
        let catalog = test_catalog();
        let err = GaEngine::builder()
            .catalog(&catalog)
            .preferences(action_profile())
            .config(GaConfig {
                generations: 0,
                ..small_config()
            })
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            EvolutionError::Preference(PreferenceError::NonPositive {
                field: "generations"
            })
        ));
    }

    #[test]
    fn test_run_produces_requested_history_length() {
        let catalog = test_catalog();
        let engine = GaEngine::builder()
            .catalog(&catalog)
            .preferences(action_profile())
            .config(small_config())
            .build()
            .unwrap();

        let mut rng = StdRng::seed_from_u64(21);
        let result = engine.run(&mut rng).unwrap();

        assert_eq!(result.stats.num_generations(), 5);
        assert!(!result.population.is_empty());
        assert!(result.population.len() <= 8);
        assert_eq!(result.rankings.len(), result.population.len());
    }

    #[test]
    fn test_run_output_ordered_best_first() {
        let catalog = test_catalog();
        let engine = GaEngine::builder()
            .catalog(&catalog)
            .preferences(action_profile())
            .config(small_config())
            .build()
            .unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        let result = engine.run(&mut rng).unwrap();

        let scores: Vec<f64> = result.rankings.iter().map(|r| r.fitness).collect();
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
        assert_eq!(
            result.best().unwrap().fitness,
            result.population.best().unwrap().fitness_f64()
        );
    }

    #[test]
    fn test_run_fails_fast_on_oversized_lists() {
        let catalog = test_catalog();
        let engine = GaEngine::builder()
            .catalog(&catalog)
            .preferences(action_profile())
            .config(GaConfig {
                num_movies_per_list: 13,
                ..small_config()
            })
            .build()
            .unwrap();

        let mut rng = StdRng::seed_from_u64(0);
        let err = engine.run(&mut rng).unwrap_err();
        assert!(matches!(
            err,
            EvolutionError::Catalog(CatalogError::InsufficientCatalog {
                requested: 13,
                available: 12
            })
        ));
    }

    #[test]
    fn test_run_is_deterministic_for_a_seed() {
        let catalog = test_catalog();
        let engine = GaEngine::builder()
            .catalog(&catalog)
            .preferences(action_profile())
            .config(small_config())
            .build()
            .unwrap();

        let result1 = engine.run(&mut StdRng::seed_from_u64(77)).unwrap();
        let result2 = engine.run(&mut StdRng::seed_from_u64(77)).unwrap();

        assert_eq!(
            result1.population.individuals(),
            result2.population.individuals()
        );
        assert_eq!(
            result1.stats.best_fitness_history(),
            result2.stats.best_fitness_history()
        );
    }
}
