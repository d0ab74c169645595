//! Artificial Bee Colony (ABC) optimizer.
//!
//! Configurable front end over [`Colony`]: owns the configuration and seed,
//! creates the RNG, and keeps the outcome of the last run.

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use super::objective::Objective;
use super::traits::OptimizationResult;
use super::{Colony, ColonyConfig};
use crate::error::Result;

/// Artificial Bee Colony optimizer.
///
/// # Example
///
/// ```
/// use bee_colony::metaheuristics::{ArtificialBeeColony, ColonyConfig};
///
/// // Rosenbrock: f(x, y) = (1 - x)² + 100(y - x²)²
/// let objective = |p: &[f64]| (1.0 - p[0]).powi(2) + 100.0 * (p[1] - p[0] * p[0]).powi(2);
///
/// let mut abc = ArtificialBeeColony::new(ColonyConfig::default()).with_seed(42);
/// let result = abc.optimize(&objective).unwrap();
///
/// assert!(result.objective_value < 1.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtificialBeeColony {
    /// Colony parameters
    pub config: ColonyConfig,
    /// Random seed
    #[serde(default)]
    seed: Option<u64>,

    #[serde(skip)]
    best: Option<Vec<f64>>,
    #[serde(skip)]
    history: Vec<f64>,
}

impl ArtificialBeeColony {
    /// Create an optimizer for `config`.
    #[must_use]
    pub fn new(config: ColonyConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Set random seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Create RNG from seed or OS entropy.
    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Minimize `objective` with a fresh colony.
    pub fn optimize<O: Objective>(&mut self, objective: O) -> Result<OptimizationResult> {
        self.reset();
        let mut rng = self.make_rng();
        let mut colony = Colony::new(objective, self.config.clone(), &mut rng)?;
        let result = colony.run(&mut rng)?;

        self.best = Some(result.solution.clone());
        self.history.clone_from(&result.history);
        Ok(result)
    }

    /// Best solution of the last run.
    #[must_use]
    pub fn best(&self) -> Option<&[f64]> {
        self.best.as_deref()
    }

    /// Best-so-far objective per iteration of the last run.
    #[must_use]
    pub fn history(&self) -> &[f64] {
        &self.history
    }

    /// Forget the last run.
    pub fn reset(&mut self) {
        self.best = None;
        self.history.clear();
    }
}
