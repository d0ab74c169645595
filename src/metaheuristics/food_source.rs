//! Food sources: candidate solutions with cached evaluation state.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::fitness::fitness_transform;
use super::objective::{self, Objective};
use super::SearchSpace;
use crate::error::Result;

/// One candidate solution plus its objective value, fitness and stagnation
/// counter.
///
/// The solution, objective value and fitness always change together through
/// `update_solution`, so `fitness == fitness_transform(objective_value)` holds
/// for every food source the colony owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodSource {
    solution: Vec<f64>,
    objective_value: f64,
    fitness_value: f64,
    trials: usize,
}

impl FoodSource {
    /// Sample a uniformly random solution from `space` and evaluate it.
    pub fn random<O, R>(space: &SearchSpace, objective: &O, rng: &mut R) -> Result<Self>
    where
        O: Objective + ?Sized,
        R: Rng + ?Sized,
    {
        Self::from_solution(space.sample(rng), objective)
    }

    /// Evaluate an explicit solution. Bounds are not checked.
    pub fn from_solution<O>(solution: Vec<f64>, objective: &O) -> Result<Self>
    where
        O: Objective + ?Sized,
    {
        let objective_value = objective::evaluate(objective, &solution)?;
        Ok(Self {
            solution,
            objective_value,
            fitness_value: fitness_transform(objective_value),
            trials: 0,
        })
    }

    /// Independent copy of the solution vector.
    #[must_use]
    pub fn solution_copy(&self) -> Vec<f64> {
        self.solution.clone()
    }

    /// Read-only view of the solution vector.
    #[must_use]
    pub fn solution(&self) -> &[f64] {
        &self.solution
    }

    /// Current fitness (higher is better).
    #[must_use]
    pub fn fitness(&self) -> f64 {
        self.fitness_value
    }

    /// Cached objective value of the current solution.
    #[must_use]
    pub fn objective_value(&self) -> f64 {
        self.objective_value
    }

    /// Consecutive update attempts that failed to improve this source.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Replace the solution and its cached evaluation, resetting `trials`.
    ///
    /// No validation: the caller guarantees the three values are consistent.
    pub(crate) fn update_solution(
        &mut self,
        solution: Vec<f64>,
        objective_value: f64,
        fitness_value: f64,
    ) {
        self.solution = solution;
        self.objective_value = objective_value;
        self.fitness_value = fitness_value;
        self.trials = 0;
    }

    /// Count one rejected update attempt.
    pub(crate) fn record_failed_trial(&mut self) {
        self.trials += 1;
    }

    /// Print the food source to stdout.
    pub fn dump(&self) {
        println!("{self}");
    }
}

impl fmt::Display for FoodSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Solution: {:?}", self.solution)?;
        writeln!(f, "Function value: {}", self.objective_value)?;
        writeln!(f, "Fitness value: {}", self.fitness_value)?;
        write!(f, "Trials: {}", self.trials)
    }
}
