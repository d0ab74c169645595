//! Derivative-free global optimization with an Artificial Bee Colony.
//!
//! The colony keeps `floor(swarm_size / 2)` food sources (candidate
//! solutions) inside a box-bounded search space and improves them in three
//! phases per iteration:
//!
//! - **Employed bees** move every food source once toward or away from a
//!   random neighbor.
//! - **Onlooker bees** revisit food sources with probability proportional to
//!   their fitness, making `np + 1` further moves.
//! - **Scout bees** abandon the most stagnant food source once it has failed
//!   to improve more than `np · dim` times, replacing it with a random point.
//!
//! # Example
//!
//! ```
//! use bee_colony::metaheuristics::{ArtificialBeeColony, ColonyConfig};
//!
//! let objective = |x: &[f64]| x.iter().map(|xi| xi * xi).sum::<f64>();
//! let config = ColonyConfig::default()
//!     .with_solution_size(3)
//!     .with_bounds(-10.0, 10.0)
//!     .with_max_iterations(300);
//!
//! let mut abc = ArtificialBeeColony::new(config).with_seed(42);
//! let result = abc.optimize(objective).unwrap();
//! assert!(result.objective_value < 1e-2);
//! ```
//!
//! Use [`Colony`] directly to thread your own RNG through the run, drive it
//! one iteration at a time, or stop early with [`Colony::run_until`].

mod abc;
pub mod benchmarks;
mod colony;
mod config;
mod fitness;
mod food_source;
mod objective;
mod search_space;
mod traits;

pub use abc::ArtificialBeeColony;
pub use colony::Colony;
pub use config::ColonyConfig;
pub use fitness::fitness_transform;
pub use food_source::FoodSource;
pub use objective::{fallible, Fallible, Objective};
pub use search_space::SearchSpace;
pub use traits::{IterationStats, OptimizationResult, TerminationReason};


#[cfg(test)]
mod tests_abc_contract;
