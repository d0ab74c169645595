//! Box-bounded continuous search space.
//!
//! Every coordinate shares the same `[lower, upper]` interval, which is the
//! only constraint the colony handles.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AbcError, Result};

/// Continuous search space `[lower, upper]^dim`.
///
/// # Example
///
/// ```
/// use bee_colony::metaheuristics::SearchSpace;
///
/// let space = SearchSpace::continuous(3, -5.0, 5.0);
/// assert_eq!(space.dimension(), 3);
/// assert!((space.clamp(7.5) - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    dim: usize,
    lower: f64,
    upper: f64,
}

impl SearchSpace {
    /// Create a continuous space without validating it.
    ///
    /// Use [`SearchSpace::try_continuous`] when the bounds come from user input.
    #[must_use]
    pub fn continuous(dim: usize, lower: f64, upper: f64) -> Self {
        Self { dim, lower, upper }
    }

    /// Create a continuous space, rejecting empty or inverted bounds.
    pub fn try_continuous(dim: usize, lower: f64, upper: f64) -> Result<Self> {
        let space = Self::continuous(dim, lower, upper);
        space.validate()?;
        Ok(space)
    }

    /// Check dimension and bounds.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(AbcError::invalid_config(
                "solution_size",
                self.dim,
                "solution_size > 0",
            ));
        }
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(AbcError::invalid_config(
                "bounds",
                format!("[{}, {}]", self.lower, self.upper),
                "finite bounds",
            ));
        }
        if !(self.upper - self.lower).is_finite() {
            return Err(AbcError::invalid_config(
                "bounds",
                format!("[{}, {}]", self.lower, self.upper),
                "finite bound width",
            ));
        }
        if self.lower >= self.upper {
            return Err(AbcError::invalid_config(
                "lower_bound",
                self.lower,
                &format!("lower_bound < upper_bound ({})", self.upper),
            ));
        }
        Ok(())
    }

    /// Number of coordinates in a solution.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Lower bound shared by all coordinates.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound shared by all coordinates.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Clamp a single coordinate into the bounds.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.lower, self.upper)
    }

    /// Whether every coordinate of `solution` lies within the bounds.
    #[must_use]
    pub fn contains(&self, solution: &[f64]) -> bool {
        solution.len() == self.dim
            && solution
                .iter()
                .all(|&x| (self.lower..=self.upper).contains(&x))
    }

    /// Draw a point uniformly at random from the space.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.dim)
            .map(|_| rng.random_range(self.lower..=self.upper))
            .collect()
    }
}
