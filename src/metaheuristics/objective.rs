//! Objective functions.
//!
//! Any `Fn(&[f64]) -> f64` is an [`Objective`]. Objectives that can fail
//! are wrapped with [`fallible`].

use anyhow::anyhow;

use crate::error::{AbcError, Result};

/// Objective function to minimize. Must be deterministic and side-effect free.
pub trait Objective {
    /// Evaluate the objective at `solution`.
    fn evaluate(&self, solution: &[f64]) -> anyhow::Result<f64>;
}

impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, solution: &[f64]) -> anyhow::Result<f64> {
        Ok(self(solution))
    }
}

/// Adapter for objectives returning `anyhow::Result<f64>`.
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(F);

/// Wrap a fallible closure so it can be used as an [`Objective`].
///
/// # Example
/// ```
/// use bee_colony::metaheuristics::{fallible, Objective};
///
/// let f = fallible(|x: &[f64]| {
///     anyhow::ensure!(x[0] >= 0.0, "negative input");
///     Ok(x[0].sqrt())
/// });
/// assert!(f.evaluate(&[4.0]).is_ok());
/// assert!(f.evaluate(&[-1.0]).is_err());
/// ```
pub fn fallible<F>(f: F) -> Fallible<F>
where
    F: Fn(&[f64]) -> anyhow::Result<f64>,
{
    Fallible(f)
}

impl<F> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> anyhow::Result<f64>,
{
    fn evaluate(&self, solution: &[f64]) -> anyhow::Result<f64> {
        (self.0)(solution)
    }
}

/// Evaluate and reject NaN so fitness comparisons stay total.
pub(crate) fn evaluate<O: Objective + ?Sized>(objective: &O, solution: &[f64]) -> Result<f64> {
    let value = objective.evaluate(solution).map_err(AbcError::Evaluation)?;
    if value.is_nan() {
        return Err(AbcError::Evaluation(anyhow!(
            "objective returned NaN at {solution:?}"
        )));
    }
    Ok(value)
}
