//! newton-opt - Derivative-free Newton minimization
//!
//! newton-opt locates minimizers of scalar objective functions with Newton's
//! method, supplying all derivative information via finite differences. The
//! caller hands over an arbitrary closure and a starting point; no analytic
//! gradients are required.
//!
//! # Modules
//!
//! - [`scalar`] - Univariate (1D) Newton minimization
//! - [`multivariate`] - Multivariate Newton minimization
//! - [`error`] - Error types
//!
//! # Quick Start
//!
//! ## Scalar Minimization
//!
//! ```
//! use newton_opt::{optimize, ScalarOptions};
//!
//! // Minimize f(x) = (x - 3)^2
//! let result = optimize(0.0, |x| (x - 3.0) * (x - 3.0), &ScalarOptions::default())
//!     .unwrap()
//!     .unwrap();
//! assert!((result.x - 3.0).abs() < 1e-6);
//! ```
//!
//! ## Multivariate Minimization
//!
//! ```
//! use newton_opt::{multi_optimize, MultiOptions};
//!
//! // Minimize f(x, y) = x^2 + y^2
//! let f = |x: &[f64]| x[0] * x[0] + x[1] * x[1];
//! let result = multi_optimize(&[5.0, 5.0], f, &MultiOptions::default()).unwrap();
//! assert!(result.converged);
//! assert!(result.function_value < 1e-6);
//! ```
//!
//! # Failure Behavior
//!
//! Only malformed input ([`OptimizeError::InvalidArgument`]) and a scalar
//! iterate crossing the divergence bound ([`OptimizeError::Divergence`]) are
//! hard errors. A vanishing second derivative or a singular Hessian ends the
//! run early with a logged warning and a partial result, and exhausting the
//! iteration budget returns the current iterate as a best effort.
//!
//! Diagnostics go through the [`log`] facade; install any logger to see them.
//!
//! Objectives are assumed pure and deterministic. Calls share no state, so
//! independent optimizations may run from parallel threads freely.

pub mod error;
pub mod multivariate;
pub mod scalar;

pub(crate) mod linalg;
pub(crate) mod numdiff;

pub use error::{OptimizeError, OptimizeResult};
pub use multivariate::{multi_optimize, MultiMinimum, MultiOptions};
pub use scalar::{optimize, ScalarMinimum, ScalarOptions, DIVERGENCE_BOUND};
