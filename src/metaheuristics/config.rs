//! Colony configuration.

use serde::{Deserialize, Serialize};

use super::SearchSpace;
use crate::error::{AbcError, Result};

/// Parameters of an Artificial Bee Colony run.
///
/// Defaults reproduce the classic 2-D Rosenbrock setup: bounds `[-5, 5]`,
/// 60 bees (30 food sources) and 1000 iterations.
///
/// # Example
///
/// ```
/// use bee_colony::metaheuristics::ColonyConfig;
///
/// let config = ColonyConfig::default()
///     .with_solution_size(4)
///     .with_swarm_size(40);
/// assert_eq!(config.food_source_count(), 20);
/// assert_eq!(config.trial_limit(), 80);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyConfig {
    /// Number of coordinates per solution
    pub solution_size: usize,
    /// Lower bound for every coordinate
    pub lower_bound: f64,
    /// Upper bound for every coordinate
    pub upper_bound: f64,
    /// Total bees; half are employed, one food source each
    pub swarm_size: usize,
    /// Iterations performed by `run`
    pub max_iterations: usize,
    /// Stop an onlooker phase after this many full passes over the food
    /// sources. `None` keeps the phase running until `np + 1` selections.
    #[serde(default)]
    pub onlooker_cycle_limit: Option<usize>,
}

impl Default for ColonyConfig {
    fn default() -> Self {
        Self {
            solution_size: 2,
            lower_bound: -5.0,
            upper_bound: 5.0,
            swarm_size: 60,
            max_iterations: 1000,
            onlooker_cycle_limit: None,
        }
    }
}

impl ColonyConfig {
    /// Create a configuration from the five core parameters.
    #[must_use]
    pub fn new(
        solution_size: usize,
        lower_bound: f64,
        upper_bound: f64,
        swarm_size: usize,
        max_iterations: usize,
    ) -> Self {
        Self {
            solution_size,
            lower_bound,
            upper_bound,
            swarm_size,
            max_iterations,
            onlooker_cycle_limit: None,
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// ```
    /// use bee_colony::metaheuristics::ColonyConfig;
    ///
    /// let config = ColonyConfig::from_json(
    ///     r#"{"solution_size": 3, "lower_bound": -1.0, "upper_bound": 1.0,
    ///         "swarm_size": 20, "max_iterations": 50}"#,
    /// ).unwrap();
    /// assert_eq!(config.solution_size, 3);
    /// assert!(config.onlooker_cycle_limit.is_none());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the solution dimension.
    #[must_use]
    pub fn with_solution_size(mut self, solution_size: usize) -> Self {
        self.solution_size = solution_size;
        self
    }

    /// Set both bounds.
    #[must_use]
    pub fn with_bounds(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Set the swarm size.
    #[must_use]
    pub fn with_swarm_size(mut self, swarm_size: usize) -> Self {
        self.swarm_size = swarm_size;
        self
    }

    /// Set the number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Bound each onlooker phase to `cycles` passes over the food sources.
    #[must_use]
    pub fn with_onlooker_cycle_limit(mut self, cycles: usize) -> Self {
        self.onlooker_cycle_limit = Some(cycles);
        self
    }

    /// Effective population: `floor(swarm_size / 2)`.
    #[must_use]
    pub fn food_source_count(&self) -> usize {
        self.swarm_size / 2
    }

    /// Failed attempts tolerated before a food source is abandoned.
    #[must_use]
    pub fn trial_limit(&self) -> usize {
        self.food_source_count() * self.solution_size
    }

    /// Search space described by the dimension and bounds.
    #[must_use]
    pub fn search_space(&self) -> SearchSpace {
        SearchSpace::continuous(self.solution_size, self.lower_bound, self.upper_bound)
    }

    /// Reject configurations the colony cannot run.
    pub fn validate(&self) -> Result<()> {
        SearchSpace::try_continuous(self.solution_size, self.lower_bound, self.upper_bound)?;
        if self.food_source_count() < 2 {
            return Err(AbcError::invalid_config(
                "swarm_size",
                self.swarm_size,
                "swarm_size >= 4 (at least two food sources)",
            ));
        }
        if self.onlooker_cycle_limit == Some(0) {
            return Err(AbcError::invalid_config(
                "onlooker_cycle_limit",
                0,
                "onlooker_cycle_limit > 0",
            ));
        }
        Ok(())
    }
}
