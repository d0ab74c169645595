//! Standard test functions for exercising the colony.
//!
//! All are minimization problems with a known global optimum of 0.

use std::f64::consts::{E, PI};

use serde::{Deserialize, Serialize};

/// Sphere: `Σxᵢ²`. Unimodal, separable. Optimum at the origin.
///
/// # Example
/// ```
/// use bee_colony::metaheuristics::benchmarks::sphere;
/// assert!(sphere(&[0.0, 0.0]).abs() < 1e-12);
/// ```
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock: `Σ[100(xᵢ₊₁ − xᵢ²)² + (1 − xᵢ)²]`. Unimodal, non-separable.
/// Optimum at `(1, …, 1)`, at the bottom of a narrow curved valley.
///
/// For two dimensions this is `(1 − x)² + 100(y − x²)²`.
///
/// # Example
/// ```
/// use bee_colony::metaheuristics::benchmarks::rosenbrock;
/// assert!(rosenbrock(&[1.0, 1.0]).abs() < 1e-12);
/// assert!((rosenbrock(&[0.0, 0.0]) - 1.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| 100.0 * (w[1] - w[0] * w[0]).powi(2) + (1.0 - w[0]).powi(2))
        .sum()
}

/// Rastrigin: `10n + Σ[xᵢ² − 10cos(2πxᵢ)]`. Multimodal lattice of local
/// minima. Optimum at the origin.
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Ackley. Multimodal with a nearly flat outer region. Optimum at the origin.
#[must_use]
pub fn ackley(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_sq = x.iter().map(|xi| xi * xi).sum::<f64>() / n;
    let mean_cos = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum::<f64>() / n;
    -20.0 * (-0.2 * mean_sq.sqrt()).exp() - mean_cos.exp() + 20.0 + E
}

/// Griewank. Multimodal, non-separable. Optimum at the origin.
#[must_use]
pub fn griewank(x: &[f64]) -> f64 {
    let sum = x.iter().map(|xi| xi * xi).sum::<f64>() / 4000.0;
    let prod: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum - prod + 1.0
}

/// Named benchmark with its customary search bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Benchmark {
    /// [`sphere`]
    Sphere,
    /// [`rosenbrock`]
    Rosenbrock,
    /// [`rastrigin`]
    Rastrigin,
    /// [`ackley`]
    Ackley,
    /// [`griewank`]
    Griewank,
}

impl Benchmark {
    /// Every benchmark, in declaration order.
    pub const ALL: [Benchmark; 5] = [
        Self::Sphere,
        Self::Rosenbrock,
        Self::Rastrigin,
        Self::Ackley,
        Self::Griewank,
    ];

    /// The objective function.
    #[must_use]
    pub fn function(self) -> fn(&[f64]) -> f64 {
        match self {
            Self::Sphere => sphere,
            Self::Rosenbrock => rosenbrock,
            Self::Rastrigin => rastrigin,
            Self::Ackley => ackley,
            Self::Griewank => griewank,
        }
    }

    /// Customary `(lower, upper)` bounds.
    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::Sphere => (-100.0, 100.0),
            Self::Rosenbrock => (-5.0, 5.0),
            Self::Rastrigin => (-5.12, 5.12),
            Self::Ackley => (-32.0, 32.0),
            Self::Griewank => (-600.0, 600.0),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "Sphere",
            Self::Rosenbrock => "Rosenbrock",
            Self::Rastrigin => "Rastrigin",
            Self::Ackley => "Ackley",
            Self::Griewank => "Griewank",
        }
    }
}
