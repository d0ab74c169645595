//! Objective-to-fitness transform.
//!
//! ```text
//! fitness(v) = 1 / (1 + v)   if v >= 0
//! fitness(v) = 1 + |v|       if v < 0
//! ```
//!
//! Smaller non-negative objectives map to larger fitness in `(0, 1]`.
//! Negative objectives map to `(1, ∞)`, growing with `|v|`.

/// Map an objective value to a fitness value (higher is better).
///
/// # Example
/// ```
/// use bee_colony::metaheuristics::fitness_transform;
/// assert!((fitness_transform(0.0) - 1.0).abs() < 1e-12);
/// assert!((fitness_transform(1.0) - 0.5).abs() < 1e-12);
/// assert!((fitness_transform(-2.0) - 3.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn fitness_transform(objective_value: f64) -> f64 {
    if objective_value >= 0.0 {
        1.0 / (1.0 + objective_value)
    } else {
        1.0 + objective_value.abs()
    }
}
