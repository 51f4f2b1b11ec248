//! Small dense linear algebra helpers for symmetric matrices.

use nalgebra::DMatrix;
use ndarray::prelude::*;

/// Eigendecomposition of a symmetric matrix.
///
/// Only the lower triangle of `a` is read; callers with possibly asymmetric
/// input should symmetrize first.
///
/// # Returns
///
/// The eigenvalues (unsorted) and a matrix whose columns are the
/// corresponding orthonormal eigenvectors, so that `a ≈ V Λ Vᵀ`.
#[must_use]
pub fn symmetric_eigen(a: &Array2<f64>) -> (Array1<f64>, Array2<f64>) {
    let n = a.nrows();
    if n == 0 {
        return (Array1::zeros(0), Array2::zeros((0, 0)));
    }

    let eigen = DMatrix::from_fn(n, n, |i, j| a[[i, j]]).symmetric_eigen();
    let values = eigen.eigenvalues.iter().copied().collect::<Array1<_>>();
    let vectors = Array2::from_shape_fn((n, n), |(i, j)| eigen.eigenvectors[(i, j)]);

    (values, vectors)
}

/// Computes `V diag(values) Vᵀ`.
#[must_use]
pub fn compose(values: &Array1<f64>, vectors: &Array2<f64>) -> Array2<f64> {
    let scaled = vectors * values;
    scaled.dot(&vectors.t())
}

/// Whether `a` and `b` have the same shape and `|a - b| <= atol + rtol * |b|`
/// holds element-wise.
#[must_use]
pub fn allclose(a: &Array2<f64>, b: &Array2<f64>, rtol: f64, atol: f64) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(&x, &y)| (x - y).abs() <= rtol.mul_add(y.abs(), atol))
}
