//! Single-variable Newton minimization.
//!
//! Newton's method applied to the stationary-point condition `f'(x) = 0`,
//! with both derivatives approximated by central differences. See
//! [`optimize`] for the full contract.

use crate::error::{OptimizeError, OptimizeResult};
use crate::numdiff;

/// Iterates whose value exceeds this bound abort the run with
/// [`OptimizeError::Divergence`]. The check is one-sided; see [`optimize`].
pub const DIVERGENCE_BOUND: f64 = 1e7;

/// Options for scalar Newton minimization.
#[derive(Debug, Clone)]
pub struct ScalarOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Absolute tolerance on the step size for convergence
    pub tol: f64,
    /// Step size for the central-difference derivatives
    pub h: f64,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self {
            max_iter: 10_000,
            tol: 1e-7,
            h: 1e-5,
        }
    }
}

/// Result from scalar Newton minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarMinimum {
    /// The minimizer found
    pub x: f64,
    /// Objective value at the minimizer
    pub value: f64,
}

/// Newton's method for minimizing a univariate function.
///
/// Each iteration approximates `f'(x)` by a central difference with step
/// `h` and `f''(x)` by central-differencing that first-derivative
/// approximation with the same `h`, then applies the update
/// `x_new = x - f'(x) / f''(x)`. Four objective evaluations per iteration.
///
/// # Arguments
/// * `start` - Initial guess
/// * `f` - Function f: R -> R to minimize
/// * `options` - Solver options
///
/// # Returns
/// * `Ok(Some(minimum))` on convergence, or on iteration exhaustion (the
///   current iterate as a best-effort result)
/// * `Ok(None)` when the second-derivative approximation is exactly zero,
///   so no Newton step exists; a warning is logged
///
/// # Errors
/// * `InvalidArgument` if `start` is not finite or the options are malformed;
///   checked before any objective evaluation
/// * `Divergence` if an updated iterate exceeds [`DIVERGENCE_BOUND`]
///
/// # Note
/// On convergence the step that satisfied the tolerance is discarded: the
/// returned `x` is the iterate the step was taken from, not `x_new`. The
/// divergence check is signed (`x > 1e7` only); large negative iterates do
/// not trip it.
pub fn optimize<F>(start: f64, f: F, options: &ScalarOptions) -> OptimizeResult<Option<ScalarMinimum>>
where
    F: Fn(f64) -> f64,
{
    validate(start, options)?;

    let mut x = start;

    for iter in 0..options.max_iter {
        let fp = numdiff::central_first(&f, x, options.h);
        let fpp = numdiff::central_second(&f, x, options.h);

        if fpp == 0.0 {
            log::warn!(
                "optimize: second derivative equals zero at x = {}, no Newton step exists",
                x
            );
            return Ok(None);
        }

        let x_new = x - fp / fpp;

        if (x - x_new).abs() < options.tol {
            break;
        }

        x = x_new;

        if x > DIVERGENCE_BOUND {
            return Err(OptimizeError::Divergence { iteration: iter, x });
        }
    }

    let value = f(x);
    Ok(Some(ScalarMinimum { x, value }))
}

fn validate(start: f64, options: &ScalarOptions) -> OptimizeResult<()> {
    if !start.is_finite() {
        return Err(OptimizeError::InvalidArgument {
            parameter: "start".to_string(),
            message: format!("must be finite, got {}", start),
        });
    }
    if options.max_iter == 0 {
        return Err(OptimizeError::InvalidArgument {
            parameter: "max_iter".to_string(),
            message: "must be positive".to_string(),
        });
    }
    if !options.tol.is_finite() || options.tol <= 0.0 {
        return Err(OptimizeError::InvalidArgument {
            parameter: "tol".to_string(),
            message: format!("must be a positive finite value, got {}", options.tol),
        });
    }
    if !options.h.is_finite() || options.h <= 0.0 {
        return Err(OptimizeError::InvalidArgument {
            parameter: "h".to_string(),
            message: format!("must be a positive finite value, got {}", options.h),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_shifted_parabola() {
        let result = optimize(0.0, |x| (x - 3.0) * (x - 3.0), &ScalarOptions::default())
            .expect("optimize failed")
            .expect("no minimum found");
        assert!((result.x - 3.0).abs() < 1e-6);
        assert!(result.value.abs() < 1e-10);
    }

    #[test_case(-10.0)]
    #[test_case(-1.0)]
    #[test_case(0.5)]
    #[test_case(2.0)]
    #[test_case(100.0)]
    fn test_parabola_from_any_start(start: f64) {
        let result = optimize(start, |x| x * x + 5.0, &ScalarOptions::default())
            .expect("optimize failed")
            .expect("no minimum found");
        assert!(result.x.abs() < 1e-5);
        assert!((result.value - 5.0).abs() < 1e-8);
    }

    #[test]
    fn test_linear_function_soft_failure() {
        // f(x) = 2x at start 0 keeps every stencil point an exact double, so
        // the second-derivative approximation is exactly zero.
        let result = optimize(0.0, |x| 2.0 * x, &ScalarOptions::default()).expect("optimize failed");
        assert!(result.is_none());
    }

    #[test]
    fn test_divergence_names_iteration() {
        // Near 0 this looks like a clean quadratic whose minimum sits at
        // 5e7, so the very first Newton step lands past the bound.
        let result = optimize(0.0, |x| 1e-8 * x * x - x, &ScalarOptions::default());
        match result {
            Err(OptimizeError::Divergence { iteration, x }) => {
                assert_eq!(iteration, 0);
                assert!(x > DIVERGENCE_BOUND);
            }
            other => panic!("expected Divergence, got {:?}", other),
        }
    }

    #[test]
    fn test_exhaustion_returns_best_effort() {
        // Newton on x^4 shrinks the iterate by a third each step; two
        // iterations from 2.0 cannot reach the default tolerance.
        let options = ScalarOptions {
            max_iter: 2,
            ..ScalarOptions::default()
        };
        let result = optimize(2.0, |x| x.powi(4), &options)
            .expect("optimize failed")
            .expect("no minimum found");
        assert!(result.x > 0.5 && result.x < 1.5);
    }

    #[test]
    fn test_invalid_start() {
        let result = optimize(f64::NAN, |x| x * x, &ScalarOptions::default());
        assert!(matches!(
            result,
            Err(OptimizeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_invalid_options_checked_before_evaluation() {
        let options = ScalarOptions {
            max_iter: 0,
            ..ScalarOptions::default()
        };
        let result = optimize(1.0, |_: f64| -> f64 { panic!("objective must not run") }, &options);
        assert!(matches!(
            result,
            Err(OptimizeError::InvalidArgument { .. })
        ));

        let options = ScalarOptions {
            tol: -1.0,
            ..ScalarOptions::default()
        };
        let result = optimize(1.0, |x| x * x, &options);
        assert!(matches!(
            result,
            Err(OptimizeError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let f = |x: f64| (x - 1.5) * (x - 1.5) + 0.25;
        let a = optimize(4.0, f, &ScalarOptions::default()).expect("optimize failed");
        let b = optimize(4.0, f, &ScalarOptions::default()).expect("optimize failed");
        assert_eq!(a, b);
    }
}
