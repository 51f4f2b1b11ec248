//! Random symmetric matrices for use as cluster covariances.

use ndarray::prelude::*;
use rand::prelude::*;

/// An affine map `x -> base + x * scale` applied to the raw entries of a
/// random matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Affine {
    /// Added to every scaled entry.
    pub base: f64,
    /// Multiplies every raw entry.
    pub scale: f64,
}

impl Affine {
    /// The default map for diagonal entries.
    pub const DIAGONAL: Self = Self { base: 0.0, scale: 1.0 };

    /// The default map for off-diagonal entries.
    pub const OFF_DIAGONAL: Self = Self { base: 1.0, scale: 1.0 };

    /// Creates a new `Affine` map.
    #[must_use]
    pub const fn new(base: f64, scale: f64) -> Self {
        Self { base, scale }
    }

    /// Applies the map to a raw value.
    #[must_use]
    pub fn apply(self, raw: f64) -> f64 {
        self.base + raw * self.scale
    }
}

impl From<(f64, f64)> for Affine {
    fn from((base, scale): (f64, f64)) -> Self {
        Self::new(base, scale)
    }
}

/// Generates a random symmetric `dim x dim` matrix.
///
/// A matrix `A` of uniform `[0, 1)` entries is drawn and `G = A Aᵀ` is
/// formed. Each diagonal entry becomes `diagonal.apply(G[i][i])`. Each pair
/// of off-diagonal entries `(i, j)` and `(j, i)` shares one random sign and
/// becomes `±off_diagonal.apply(G[i][j])` and `±off_diagonal.apply(G[j][i])`.
///
/// Since the entries of `G` lie in `[0, dim)`, diagonal magnitudes lie in
/// `[diagonal.base, diagonal.base + dim * diagonal.scale)` for non-negative
/// scales, and likewise for the off-diagonal magnitudes.
///
/// The result is not guaranteed to be positive-semi-definite. Choosing
/// `diagonal.base` large relative to the off-diagonal magnitudes makes it so
/// in practice, and that choice is left to the caller.
///
/// # Arguments
///
/// * `dim`: the number of rows and columns.
/// * `diagonal`: the map applied to the diagonal entries.
/// * `off_diagonal`: the map applied to the off-diagonal entries.
/// * `rng`: random number generator.
#[must_use]
pub fn random_symmetric_matrix<R: Rng>(dim: usize, diagonal: Affine, off_diagonal: Affine, rng: &mut R) -> Array2<f64> {
    let raw = Array2::from_shape_fn((dim, dim), |_| rng.gen::<f64>());
    let gram = raw.dot(&raw.t());

    // Averaged with its transpose so that (i, j) and (j, i) start out bit-identical.
    let mut symm = (&gram + &gram.t()) / 2.0;

    for i in 0..dim {
        for j in (i + 1)..dim {
            let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            symm[[i, j]] = sign * off_diagonal.apply(symm[[i, j]]);
            symm[[j, i]] = sign * off_diagonal.apply(symm[[j, i]]);
        }
        symm[[i, i]] = diagonal.apply(symm[[i, i]]);
    }

    symm
}

/// Whether `m` is square and equal to its transpose within `tol`.
#[must_use]
pub fn is_symmetric(m: &Array2<f64>, tol: f64) -> bool {
    let (rows, cols) = m.dim();
    rows == cols && (0..rows).all(|i| (0..i).all(|j| (m[[i, j]] - m[[j, i]]).abs() <= tol))
}
