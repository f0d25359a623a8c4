//! Dense linear algebra for the Newton step.
//!
//! The multivariate optimizer needs exactly two primitives: a Euclidean norm
//! for the convergence check and a dense solve for `H * step = grad`.
//! Matrices are row-major flat slices sized `n * n`.

/// Pivot magnitudes below this are treated as a singular matrix.
pub(crate) const SINGULAR_PIVOT: f64 = 1e-14;

/// Euclidean (L2) norm of a vector.
#[inline]
pub(crate) fn norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting.
///
/// `a` is a row-major `n x n` matrix; it is copied, not modified in place.
/// Returns `None` when a pivot falls below [`SINGULAR_PIVOT`], i.e. the
/// system is singular and the Newton step is undefined.
pub(crate) fn solve(a: &[f64], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n * n {
        return None;
    }

    let mut m = a.to_vec();
    let mut rhs = b.to_vec();

    // Forward elimination
    for col in 0..n {
        let mut pivot_row = col;
        let mut pivot_val = m[col * n + col].abs();
        for row in (col + 1)..n {
            let v = m[row * n + col].abs();
            if v > pivot_val {
                pivot_val = v;
                pivot_row = row;
            }
        }

        if pivot_val < SINGULAR_PIVOT {
            return None;
        }

        if pivot_row != col {
            for j in 0..n {
                m.swap(col * n + j, pivot_row * n + j);
            }
            rhs.swap(col, pivot_row);
        }

        for row in (col + 1)..n {
            let factor = m[row * n + col] / m[col * n + col];
            for j in col..n {
                m[row * n + j] -= factor * m[col * n + j];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    // Back substitution
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = rhs[i];
        for j in (i + 1)..n {
            sum -= m[i * n + j] * x[j];
        }
        x[i] = sum / m[i * n + i];
    }

    Some(x)
}
