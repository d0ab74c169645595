//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use bee_colony::prelude::*;
//! ```

pub use crate::error::{AbcError, Result};
pub use crate::metaheuristics::benchmarks::Benchmark;
pub use crate::metaheuristics::{
    fallible, ArtificialBeeColony, Colony, ColonyConfig, FoodSource, Objective,
    OptimizationResult, SearchSpace, TerminationReason,
};
