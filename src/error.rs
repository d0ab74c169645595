//! Error types for colony operations.
//!
//! Provides rich error context for library consumers.

use thiserror::Error;

/// Result type alias for colony operations.
pub type Result<T> = std::result::Result<T, AbcError>;

/// Main error type for colony operations.
///
/// # Examples
///
/// ```
/// use bee_colony::error::AbcError;
///
/// let err = AbcError::invalid_config("swarm_size", 2, "floor(swarm_size / 2) >= 2");
/// assert!(err.to_string().contains("swarm_size"));
/// ```
#[derive(Debug, Error)]
pub enum AbcError {
    /// A construction parameter violates its constraint.
    #[error("Invalid configuration: {param} = {value}, expected {constraint}")]
    InvalidConfiguration {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The objective function failed or produced NaN.
    #[error("Objective evaluation failed: {0}")]
    Evaluation(#[source] anyhow::Error),

    /// No scout phase has completed yet, so there is no best solution.
    #[error("Best solution not yet available: no iteration has completed")]
    BestSolutionUnavailable,

    /// Configuration could not be deserialized.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AbcError {
    /// Build an [`AbcError::InvalidConfiguration`].
    pub fn invalid_config(
        param: &str,
        value: impl ToString,
        constraint: &str,
    ) -> Self {
        Self::InvalidConfiguration {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}

impl From<serde_json::Error> for AbcError {
    fn from(err: serde_json::Error) -> Self {
        AbcError::Config(err.to_string())
    }
}
