//! Run configuration
//!
//! This module provides the parameter set that shapes one evolution run.

use serde::{Deserialize, Serialize};

use crate::error::PreferenceError;

/// Configuration for a GA run
///
/// Defaults mirror the interactive form this engine was extracted from:
/// 100 generations, crossover 0.8, mutation 0.3, 10 initial / 20 maximum
/// individuals, 5 movies per list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of generations to run; the loop never exits early
    pub generations: usize,
    /// Probability that any unordered population pair becomes a parent pair
    pub crossover_probability: f64,
    /// Probability that an offspring has one slot replaced
    pub mutation_probability: f64,
    /// Population size immediately after initial sampling
    pub initial_population_size: usize,
    /// Population ceiling enforced by survivor pruning
    pub max_population_size: usize,
    /// Fixed number of movies per individual
    pub num_movies_per_list: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            generations: 100,
            crossover_probability: 0.8,
            mutation_probability: 0.3,
            initial_population_size: 10,
            max_population_size: 20,
            num_movies_per_list: 5,
        }
    }
}

impl GaConfig {
    /// Validate every field before a run starts
    ///
    /// A run either starts with a fully valid configuration or not at all;
    /// there is no partial execution.
    pub fn validate(&self) -> Result<(), PreferenceError> {
        if self.generations == 0 {
            return Err(PreferenceError::NonPositive {
                field: "generations",
            });
        }
        Self::check_probability("crossover_probability", self.crossover_probability)?;
        Self::check_probability("mutation_probability", self.mutation_probability)?;
        if self.initial_population_size == 0 {
            return Err(PreferenceError::NonPositive {
                field: "initial_population_size",
            });
        }
        if self.max_population_size == 0 {
            return Err(PreferenceError::NonPositive {
                field: "max_population_size",
            });
        }
        if self.num_movies_per_list == 0 {
            return Err(PreferenceError::NonPositive {
                field: "num_movies_per_list",
            });
        }
        Ok(())
    }

    fn check_probability(field: &'static str, value: f64) -> Result<(), PreferenceError> {
        if !(0.0..=1.0).contains(&value) || value.is_nan() {
            return Err(PreferenceError::ProbabilityOutOfRange { field, value });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_generations_rejected() {
        let config = GaConfig {
            generations: 0,
            ..GaConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            PreferenceError::NonPositive {
                field: "generations"
            }
        );
    }

    #[test]
    fn test_probability_bounds() {
        let config = GaConfig {
            crossover_probability: 1.2,
            ..GaConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            PreferenceError::ProbabilityOutOfRange {
                field: "crossover_probability",
                ..
            }
        ));

        let config = GaConfig {
            mutation_probability: -0.1,
            ..GaConfig::default()
        };
        assert!(matches!(
            config.validate().unwrap_err(),
            PreferenceError::ProbabilityOutOfRange {
                field: "mutation_probability",
                ..
            }
        ));

        // Boundary values are legal: 0 disables, 1 always fires
        let config = GaConfig {
            crossover_probability: 0.0,
            mutation_probability: 1.0,
            ..GaConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_sizes_rejected() {
        for field in ["initial_population_size", "max_population_size", "num_movies_per_list"] {
            let mut config = GaConfig::default();
            match field {
                "initial_population_size" => config.initial_population_size = 0,
                "max_population_size" => config.max_population_size = 0,
                _ => config.num_movies_per_list = 0,
            }
            assert_eq!(
                config.validate().unwrap_err(),
                PreferenceError::NonPositive { field }
            );
        }
    }

    #[test]
    fn test_initial_larger_than_max_is_allowed() {
        // Recommended but not required: pruning trims the first generation
        let config = GaConfig {
            initial_population_size: 30,
            max_population_size: 20,
            ..GaConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
