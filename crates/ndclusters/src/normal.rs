//! Sampling from multivariate normal distributions.

use ndarray::prelude::*;
use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::{linalg, SamplingError};

/// Tolerance used when checking that a covariance is positive-semi-definite.
const PSD_TOLERANCE: f64 = 1e-8;

/// What to do with a covariance that is not symmetric positive-semi-definite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CovarianceCheck {
    /// Reject the covariance with `SamplingError::NotPositiveSemiDefinite`.
    #[default]
    Raise,
    /// Log a warning and sample from the absolute value of its spectrum.
    Warn,
    /// Silently sample from the absolute value of its spectrum.
    Ignore,
}

/// A multivariate normal distribution with a fixed mean and covariance.
///
/// The covariance `C` is factored as `C ≈ Q |Λ| Qᵀ` from its
/// eigendecomposition, and a sample is `mean + Q |Λ|^½ z` with `z` drawn
/// from the standard normal distribution. For a valid covariance this is
/// exact; for an indefinite one (when allowed by the `CovarianceCheck`) the
/// samples follow the matrix with the same eigenvectors and the absolute
/// eigenvalues.
#[derive(Debug, Clone)]
pub struct MultivariateNormal {
    /// The mean of the distribution.
    mean: Vec<f64>,
    /// Columns are the eigenvectors scaled by the root of their eigenvalues.
    factor: Array2<f64>,
}

impl MultivariateNormal {
    /// Creates a new `MultivariateNormal`.
    ///
    /// # Arguments
    ///
    /// * `mean`: the mean vector.
    /// * `covariance`: a square matrix with one row per entry of `mean`.
    /// * `check`: what to do if `covariance` is not symmetric positive-semi-definite.
    ///
    /// # Errors
    ///
    /// * If `covariance` is not square or its size differs from that of `mean`.
    /// * If `mean` or `covariance` contains NaN or infinite values.
    /// * If `check` is `Raise` and `covariance` is not symmetric positive-semi-definite.
    pub fn new(mean: &[f64], covariance: &Array2<f64>, check: CovarianceCheck) -> Result<Self, SamplingError> {
        let dim = mean.len();
        let (rows, cols) = covariance.dim();
        if rows != dim || cols != dim {
            return Err(SamplingError::DimensionMismatch {
                what: "covariance",
                expected: dim,
                found: vec![rows, cols],
            });
        }
        if mean.iter().any(|x| !x.is_finite()) {
            return Err(SamplingError::NonFinite("mean"));
        }
        if covariance.iter().any(|x| !x.is_finite()) {
            return Err(SamplingError::NonFinite("covariance"));
        }

        let symmetric = (covariance + &covariance.t()) / 2.0;
        let (values, vectors) = linalg::symmetric_eigen(&symmetric);
        let magnitudes = values.mapv(f64::abs);

        if check != CovarianceCheck::Ignore
            && !linalg::allclose(
                &linalg::compose(&magnitudes, &vectors),
                covariance,
                PSD_TOLERANCE,
                PSD_TOLERANCE,
            )
        {
            let min_eigenvalue = values.iter().copied().fold(f64::INFINITY, f64::min);
            if check == CovarianceCheck::Raise {
                return Err(SamplingError::NotPositiveSemiDefinite { min_eigenvalue });
            }
            ftlog::warn!(
                "Covariance is not symmetric positive-semi-definite (smallest eigenvalue {min_eigenvalue:.6e}). Sampling from its absolute spectrum."
            );
        }

        let factor = &vectors * &magnitudes.mapv(f64::sqrt);

        Ok(Self {
            mean: mean.to_vec(),
            factor,
        })
    }

    /// The number of dimensions of the distribution.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.mean.len()
    }

    /// The mean of the distribution.
    #[must_use]
    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    /// Draws `n` independent samples.
    ///
    /// The standard normal draws are taken row by row, so the result is the
    /// same as `n` calls to `sample` with the same random number generator.
    pub fn sample_n<R: Rng>(&self, rng: &mut R, n: usize) -> Vec<Vec<f64>> {
        let z = Array2::<f64>::from_shape_fn((n, self.dimension()), |_| StandardNormal.sample(rng));
        let samples = z.dot(&self.factor.t()) + &ArrayView1::from(self.mean.as_slice());
        samples.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}

impl Distribution<Vec<f64>> for MultivariateNormal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        let z = Array1::<f64>::from_shape_fn(self.dimension(), |_| StandardNormal.sample(rng));
        (self.factor.dot(&z) + &ArrayView1::from(self.mean.as_slice())).to_vec()
    }
}
