//! Population types
//!
//! This module provides the individual and population container types.

pub mod individual;
pub mod population;

pub use individual::Individual;
pub use population::Population;

pub mod prelude {
    pub use super::individual::Individual;
    pub use super::population::Population;
}
