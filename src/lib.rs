//! bee-colony: Artificial Bee Colony optimization in pure Rust.
//!
//! Minimizes a real-valued objective over a box-bounded continuous search
//! space with the three-phase ABC metaheuristic (employed, onlooker and
//! scout bees).
//!
//! # Quick Start
//!
//! ```
//! use bee_colony::prelude::*;
//!
//! // Rosenbrock: global minimum 0 at (1, 1)
//! let objective = |p: &[f64]| (1.0 - p[0]).powi(2) + 100.0 * (p[1] - p[0] * p[0]).powi(2);
//!
//! let config = ColonyConfig::new(2, -5.0, 5.0, 60, 1000);
//! let mut abc = ArtificialBeeColony::new(config).with_seed(42);
//! let result = abc.optimize(objective).unwrap();
//!
//! assert!(result.objective_value < 1.0);
//! ```
//!
//! # Modules
//!
//! - [`metaheuristics`]: the colony, its food sources, configuration and
//!   benchmark functions
//! - [`error`]: error types
//! - [`prelude`]: common imports
//!
//! # Logging
//!
//! The crate emits [`tracing`] events (`debug` per iteration and scout
//! restart, `info` at the end of a run) and never installs a subscriber.

pub mod error;
pub mod metaheuristics;
pub mod prelude;

pub use error::{AbcError, Result};
