//! Finite-difference derivative approximations.
//!
//! All derivative information used by the optimizers comes from here; callers
//! never supply analytic derivatives. The scalar second derivative is a
//! nested difference-of-differences with the same step inside and out, and
//! the Hessian is built column by column from independently-differenced
//! gradients. Both formulas are kept in this exact form for compatibility
//! with existing results; they are noisier than the standard stencils.

/// Central-difference first derivative: `(f(x+h) - f(x-h)) / (2h)`.
#[inline]
pub(crate) fn central_first<F>(f: &F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + h) - f(x - h)) / (2.0 * h)
}

/// Central-difference second derivative, obtained by differencing
/// [`central_first`] itself at `x + h` and `x - h` with the same `h`.
///
/// Costs four objective evaluations. The achieved precision is below a
/// direct 3-point second-difference because the same step is used for the
/// outer and inner difference.
#[inline]
pub(crate) fn central_second<F>(f: &F, x: f64, h: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (central_first(f, x + h, h) - central_first(f, x - h, h)) / (2.0 * h)
}

/// Forward-difference gradient: `g[i] = (f(x + eps*e_i) - f(x)) / eps`.
///
/// Costs `n + 1` objective evaluations.
pub(crate) fn forward_gradient<F>(f: &F, x: &[f64], eps: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let n = x.len();
    let fx = f(x);
    let mut grad = vec![0.0; n];
    let mut x_pert = x.to_vec();

    for i in 0..n {
        let x_orig = x_pert[i];
        x_pert[i] = x_orig + eps;
        grad[i] = (f(&x_pert) - fx) / eps;
        x_pert[i] = x_orig;
    }

    grad
}

/// Finite-difference Hessian approximation, row-major `n x n`.
///
/// Column `i` is `(g(x + eps*e_i) - g(x - eps*e_i)) / (2*eps)` where `g` is
/// the forward-difference gradient with the same `eps`. The columns are
/// differenced independently, so the result is generally not perfectly
/// symmetric; no symmetrization is applied.
///
/// Costs `2n(n + 1)` objective evaluations.
pub(crate) fn hessian<F>(f: &F, x: &[f64], eps: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let n = x.len();
    let mut h = vec![0.0; n * n];
    let mut x_pert = x.to_vec();

    for col in 0..n {
        let x_orig = x_pert[col];

        x_pert[col] = x_orig + eps;
        let g_plus = forward_gradient(f, &x_pert, eps);

        x_pert[col] = x_orig - eps;
        let g_minus = forward_gradient(f, &x_pert, eps);

        x_pert[col] = x_orig;

        for row in 0..n {
            h[row * n + col] = (g_plus[row] - g_minus[row]) / (2.0 * eps);
        }
    }

    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_central_first_quadratic() {
        // f(x) = x^2, f'(2) = 4
        let f = |x: f64| x * x;
        let d = central_first(&f, 2.0, 1e-5);
        assert!((d - 4.0).abs() < 1e-8);
    }

    #[test]
    fn test_central_second_quadratic() {
        // f(x) = 3x^2, f''(x) = 6 everywhere
        let f = |x: f64| 3.0 * x * x;
        let d2 = central_second(&f, 1.0, 1e-5);
        assert!((d2 - 6.0).abs() < 1e-3);
    }

    #[test]
    fn test_central_second_exactly_linear() {
        // f(x) = 2x at x = 0: every stencil point is an exact double, so the
        // nested difference is exactly zero.
        let f = |x: f64| 2.0 * x;
        assert_eq!(central_second(&f, 0.0, 1e-5), 0.0);
    }

    #[test]
    fn test_forward_gradient_quadratic() {
        // f(x, y) = x^2 + y^2, gradient at (1, 2) is (2, 4)
        let f = |x: &[f64]| x[0] * x[0] + x[1] * x[1];
        let grad = forward_gradient(&f, &[1.0, 2.0], 1e-8);
        assert!((grad[0] - 2.0).abs() < 1e-6);
        assert!((grad[1] - 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_hessian_sphere() {
        // f(x, y) = x^2 + y^2 has Hessian 2*I everywhere
        let f = |x: &[f64]| x[0] * x[0] + x[1] * x[1];
        let h = hessian(&f, &[1.0, -2.0], 1e-5);
        assert!((h[0] - 2.0).abs() < 1e-3);
        assert!((h[3] - 2.0).abs() < 1e-3);
        assert!(h[1].abs() < 1e-3);
        assert!(h[2].abs() < 1e-3);
    }

    #[test]
    fn test_hessian_cross_term() {
        // f(x, y) = x*y has Hessian [[0, 1], [1, 0]]
        let f = |x: &[f64]| x[0] * x[1];
        let h = hessian(&f, &[0.5, 0.5], 1e-5);
        assert!(h[0].abs() < 1e-3);
        assert!((h[1] - 1.0).abs() < 1e-3);
        assert!((h[2] - 1.0).abs() < 1e-3);
        assert!(h[3].abs() < 1e-3);
    }
}
