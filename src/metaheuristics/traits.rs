//! Result and progress types shared by the colony and its front end.

use serde::{Deserialize, Serialize};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// All configured iterations ran.
    MaxIterations,
    /// The caller's stop predicate asked to end the run.
    Cancelled,
    /// All iterations ran, but at least one onlooker phase hit its cycle bound.
    OnlookerCycleLimit,
}

/// Outcome of an optimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Best solution found
    pub solution: Vec<f64>,
    /// Objective value of the best solution
    pub objective_value: f64,
    /// Fitness of the best solution
    pub fitness: f64,
    /// Objective evaluations, including initialization
    pub evaluations: usize,
    /// Completed iterations
    pub iterations: usize,
    /// Best-so-far objective after each iteration
    pub history: Vec<f64>,
    /// Why the run stopped
    pub termination: TerminationReason,
}

/// Snapshot handed to the stop predicate after every iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    /// 1-based index of the iteration that just finished
    pub iteration: usize,
    /// Best-so-far objective value
    pub best_objective: f64,
    /// Best-so-far fitness
    pub best_fitness: f64,
    /// Objective evaluations so far
    pub evaluations: usize,
    /// Index of the food source restarted by the scout phase, if any
    pub scouted: Option<usize>,
}
