//! Error types for the Newton optimizers.

use std::fmt;

/// Result type for optimizer entry points.
pub type OptimizeResult<T> = Result<T, OptimizeError>;

/// Errors that abort an optimization run.
///
/// Only malformed input and numeric divergence are hard failures. A zero
/// second derivative or a singular Hessian degrades to a partial result
/// instead, so callers can inspect whatever progress was made.
#[derive(Debug, Clone, PartialEq)]
pub enum OptimizeError {
    /// An argument failed validation before any iteration ran.
    InvalidArgument { parameter: String, message: String },

    /// The iterate exceeded the divergence bound.
    Divergence { iteration: usize, x: f64 },
}

impl fmt::Display for OptimizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { parameter, message } => {
                write!(f, "Invalid argument '{}': {}", parameter, message)
            }
            Self::Divergence { iteration, x } => {
                write!(
                    f,
                    "At iteration {}, optimization appears to be diverging (x = {})",
                    iteration, x
                )
            }
        }
    }
}

impl std::error::Error for OptimizeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divergence_display_names_iteration() {
        let err = OptimizeError::Divergence {
            iteration: 7,
            x: 2.5e7,
        };
        let msg = err.to_string();
        assert!(msg.contains("iteration 7"));
        assert!(msg.contains("diverging"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = OptimizeError::InvalidArgument {
            parameter: "max_iter".to_string(),
            message: "must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid argument 'max_iter': must be positive"
        );
    }
}
