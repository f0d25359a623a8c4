//! Multi-variable Newton minimization.
//!
//! Vector Newton's method: a forward-difference gradient, a
//! finite-difference Hessian built column by column, and a dense linear
//! solve for the step each iteration. See [`multi_optimize`] for the full
//! contract.

use crate::error::{OptimizeError, OptimizeResult};
use crate::linalg;
use crate::numdiff;

/// Options for multivariate Newton minimization.
#[derive(Debug, Clone)]
pub struct MultiOptions {
    /// Maximum number of iterations
    pub max_iter: usize,
    /// Tolerance on the Euclidean norm of the step for convergence
    pub tol: f64,
    /// Step size for the forward-difference gradient
    pub grad_eps: f64,
    /// Perturbation (and inner gradient step) for the Hessian columns
    pub hessian_eps: f64,
}

impl Default for MultiOptions {
    fn default() -> Self {
        Self {
            max_iter: 10_000,
            tol: 1e-7,
            grad_eps: 1e-8,
            hessian_eps: 1e-5,
        }
    }
}

/// Result from multivariate Newton minimization.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiMinimum {
    /// The minimizer found (or the last iterate on a soft failure)
    pub minimum: Vec<f64>,
    /// Objective value at `minimum`
    pub function_value: f64,
    /// Number of Newton updates applied
    pub iterations: usize,
    /// Number of objective evaluations
    pub nfev: usize,
    /// Whether the step-norm tolerance was met
    pub converged: bool,
}

/// Newton's method for minimizing a multivariate function.
///
/// Each iteration approximates the gradient by forward differences with
/// step `grad_eps`, builds the Hessian by central-differencing
/// forward-difference gradients column by column with step `hessian_eps`,
/// solves `H * step = grad`, and updates `x_new = x - step`. The Hessian
/// columns are differenced independently and are not symmetrized. Objective
/// evaluation cost is `(n + 1)(2n + 1)` per iteration.
///
/// # Arguments
/// * `start` - Initial guess, length fixes the problem dimension
/// * `f` - Function f: R^n -> R to minimize
/// * `options` - Solver options
///
/// # Returns
/// A [`MultiMinimum`]. A singular Hessian is a soft failure: the current
/// iterate, its objective value, and the updates applied so far come back
/// with `converged: false` after a logged warning. Iteration exhaustion
/// likewise returns the current iterate as a best-effort result.
///
/// # Errors
/// * `InvalidArgument` if `start` is empty or contains non-finite values,
///   or the options are malformed; checked before any objective evaluation
///
/// # Note
/// Unlike [`optimize`](crate::scalar::optimize) there is no divergence
/// bound on the iterates; a run that diverges ends by exhausting
/// `max_iter`. This asymmetry is deliberate and kept for compatibility.
pub fn multi_optimize<F>(
    start: &[f64],
    f: F,
    options: &MultiOptions,
) -> OptimizeResult<MultiMinimum>
where
    F: Fn(&[f64]) -> f64,
{
    validate(start, options)?;

    let n = start.len();
    let mut x = start.to_vec();
    let mut nfev = 0;

    for iter in 0..options.max_iter {
        let grad = numdiff::forward_gradient(&f, &x, options.grad_eps);
        nfev += n + 1;

        let hess = numdiff::hessian(&f, &x, options.hessian_eps);
        nfev += 2 * n * (n + 1);

        let step = match linalg::solve(&hess, &grad) {
            Some(step) => step,
            None => {
                log::warn!(
                    "multi_optimize: Hessian is not invertible at iteration {}, stopping",
                    iter
                );
                let function_value = f(&x);
                nfev += 1;
                return Ok(MultiMinimum {
                    minimum: x,
                    function_value,
                    iterations: iter,
                    nfev,
                    converged: false,
                });
            }
        };

        let x_new: Vec<f64> = x.iter().zip(step.iter()).map(|(xi, si)| xi - si).collect();
        let change: Vec<f64> = x_new.iter().zip(x.iter()).map(|(a, b)| a - b).collect();

        x = x_new;

        if linalg::norm(&change) < options.tol {
            log::debug!("multi_optimize: converged after {} iterations", iter + 1);
            let function_value = f(&x);
            nfev += 1;
            return Ok(MultiMinimum {
                minimum: x,
                function_value,
                iterations: iter + 1,
                nfev,
                converged: true,
            });
        }
    }

    let function_value = f(&x);
    nfev += 1;
    Ok(MultiMinimum {
        minimum: x,
        function_value,
        iterations: options.max_iter,
        nfev,
        converged: false,
    })
}

fn validate(start: &[f64], options: &MultiOptions) -> OptimizeResult<()> {
    if start.is_empty() {
        return Err(OptimizeError::InvalidArgument {
            parameter: "start".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if let Some(bad) = start.iter().find(|v| !v.is_finite()) {
        return Err(OptimizeError::InvalidArgument {
            parameter: "start".to_string(),
            message: format!("components must be finite, got {}", bad),
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
    if !options.grad_eps.is_finite() || options.grad_eps <= 0.0 {
        return Err(OptimizeError::InvalidArgument {
            parameter: "grad_eps".to_string(),
            message: format!("must be a positive finite value, got {}", options.grad_eps),
        });
    }
    if !options.hessian_eps.is_finite() || options.hessian_eps <= 0.0 {
        return Err(OptimizeError::InvalidArgument {
            parameter: "hessian_eps".to_string(),
            message: format!("must be a positive finite value, got {}", options.hessian_eps),
        });
    }
    Ok(())
}
