//! # reel-evo
//!
//! A genetic-algorithm engine for evolving movie lists toward a taste profile.
//!
//! The engine repeatedly samples, recombines, and filters fixed-size lists of
//! catalog movies so that the surviving lists maximize a preference-based
//! fitness score. Selection pressure comes entirely from survivor pruning:
//! parent pairs are drawn uniformly, and the old population always competes
//! against its offspring, so the best fitness never regresses.
//!
//! ## Core Concepts
//!
//! - **Catalog as search space**: individuals are fixed-length lists of
//!   immutable [`MovieRecord`](catalog::MovieRecord)s drawn from a read-only
//!   [`Catalog`](catalog::Catalog)
//! - **Preference-driven fitness**: genre/cast/director overlap bonuses and a
//!   runtime-distance penalty, scored per movie and summed per list
//! - **Pruning as selection**: deduplicate, filter, rank, truncate
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use reel_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = GaEngine::builder()
//!     .catalog(&catalog)
//!     .preferences(profile)
//!     .config(GaConfig::default())
//!     .build()?
//!     .run(&mut rng)?;
//!
//! for record in result.rankings.iter().take(3) {
//!     println!("{:.2}: {:?}", record.fitness, record.individual.titles());
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod ingest;
pub mod operators;
pub mod population;
pub mod preferences;
pub mod pruning;
pub mod stats;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{Catalog, MovieRecord};
    pub use crate::config::GaConfig;
    pub use crate::engine::{GaEngine, GaEngineBuilder};
    pub use crate::error::*;
    pub use crate::fitness::{Fitness, FitnessRecord, PreferenceFitness};
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::preferences::PreferenceProfile;
    pub use crate::pruning::SurvivorPruner;
    pub use crate::stats::{EvolutionResult, EvolutionStats, GenerationStats};
}
