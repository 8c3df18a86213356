//! Genetic operators
//!
//! This module provides the selection, crossover, and mutation operators.

pub mod crossover;
pub mod mutation;
pub mod selection;
pub mod traits;

pub use crossover::TailSwapCrossover;
pub use mutation::SlotReplacementMutator;
pub use selection::UniformPairSelector;
pub use traits::{CrossoverOperator, MutationOperator, PairSelector};

pub mod prelude {
    pub use super::crossover::TailSwapCrossover;
    pub use super::mutation::SlotReplacementMutator;
    pub use super::selection::UniformPairSelector;
    pub use super::traits::{CrossoverOperator, MutationOperator, PairSelector};
}
