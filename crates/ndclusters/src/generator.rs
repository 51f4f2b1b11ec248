//! The cluster generator and its accumulated state.

use std::path::Path;

use ndarray::prelude::*;
use rand::prelude::*;

use crate::{covariance, io, Affine, CovarianceCheck, GenError, MultivariateNormal, SamplingError};

/// The name of the auxiliary dump written by `ClusterGenerator::save`.
pub const DUMP_FILE_NAME: &str = "test.csv";

/// The parameters of the multivariate normal distribution behind one cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct Gaussian {
    /// The mean vector.
    pub mean: Vec<f64>,
    /// The covariance matrix.
    pub covariance: Array2<f64>,
}

/// Generates labeled clusters of points from multivariate normal
/// distributions and saves them to disk.
///
/// Each call to `seed` (or `seed_in_range`) adds one cluster. Its points are
/// labeled with the index of the cluster, starting from zero, and its mean
/// and covariance are recorded.
///
/// The generator holds its state by value and is mutated through `&mut self`,
/// so it has a single writer at any time.
#[derive(Debug, Clone)]
pub struct ClusterGenerator {
    /// The dimension of every point, fixed at construction.
    dimension: usize,
    /// The number of clusters seeded so far.
    cluster_count: usize,
    /// Every point with its cluster label, in the order they were generated.
    points: Vec<(usize, Vec<f64>)>,
    /// The distribution of each cluster, in the order they were seeded.
    distributions: Vec<Gaussian>,
    /// Points generated since the last auxiliary dump.
    raw_points: Vec<Vec<f64>>,
    /// The validity check applied to every covariance before sampling.
    check: CovarianceCheck,
    /// Random number generator for covariances and samples.
    rng: StdRng,
}

impl ClusterGenerator {
    /// Creates a new generator for points with `dimension` coordinates,
    /// seeding its random number generator from system entropy.
    ///
    /// # Errors
    ///
    /// * If `dimension` is zero.
    pub fn new(dimension: usize) -> Result<Self, GenError> {
        Self::with_rng(dimension, StdRng::from_entropy())
    }

    /// Creates a new generator with a reproducible random number generator.
    ///
    /// # Errors
    ///
    /// * If `dimension` is zero.
    pub fn with_seed(dimension: usize, seed: u64) -> Result<Self, GenError> {
        Self::with_rng(dimension, StdRng::seed_from_u64(seed))
    }

    /// Creates a new generator around the given random number generator.
    fn with_rng(dimension: usize, rng: StdRng) -> Result<Self, GenError> {
        if dimension < 1 {
            return Err(GenError::InvalidDimension(dimension));
        }

        Ok(Self {
            dimension,
            cluster_count: 0,
            points: Vec::new(),
            distributions: Vec::new(),
            raw_points: Vec::new(),
            check: CovarianceCheck::default(),
            rng,
        })
    }

    /// Sets what to do with covariances that are not symmetric
    /// positive-semi-definite. The default is `CovarianceCheck::Raise`.
    #[must_use]
    pub fn with_covariance_check(mut self, check: CovarianceCheck) -> Self {
        self.check = check;
        self
    }

    /// The dimension of every point.
    #[must_use]
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// The number of clusters seeded so far.
    #[must_use]
    pub const fn cluster_count(&self) -> usize {
        self.cluster_count
    }

    /// The total number of points generated.
    #[must_use]
    pub fn cardinality(&self) -> usize {
        self.points.len()
    }

    /// Every point with its cluster label, in generation order.
    #[must_use]
    pub fn points(&self) -> &[(usize, Vec<f64>)] {
        &self.points
    }

    /// The distribution of each cluster, in seeding order.
    #[must_use]
    pub fn distributions(&self) -> &[Gaussian] {
        &self.distributions
    }

    /// The points generated since the last save.
    #[must_use]
    pub fn raw_points(&self) -> &[Vec<f64>] {
        &self.raw_points
    }

    /// Adds a cluster of `count` points drawn from the multivariate normal
    /// distribution with the given `mean` and `covariance`.
    ///
    /// The distribution is recorded and the cluster index advances by one
    /// even when `count` is zero. On error no cluster or point is recorded.
    ///
    /// # Errors
    ///
    /// * If `mean` does not have `dimension` entries.
    /// * If `covariance` is not a `dimension x dimension` matrix.
    /// * If `mean` or `covariance` holds non-finite values.
    /// * If `covariance` is not symmetric positive-semi-definite and the
    ///   generator was built with `CovarianceCheck::Raise`.
    pub fn seed(&mut self, mean: &[f64], covariance: &Array2<f64>, count: usize) -> Result<(), GenError> {
        if mean.len() != self.dimension {
            return Err(SamplingError::DimensionMismatch {
                what: "mean",
                expected: self.dimension,
                found: vec![mean.len()],
            }
            .into());
        }

        let normal = MultivariateNormal::new(mean, covariance, self.check)?;
        let samples = normal.sample_n(&mut self.rng, count);

        let label = self.cluster_count;
        ftlog::info!("Seeding cluster {label} with {count} points around {mean:?}.");

        self.raw_points.extend(samples.iter().cloned());
        self.points.extend(samples.into_iter().map(|point| (label, point)));
        self.distributions.push(Gaussian {
            mean: mean.to_vec(),
            covariance: covariance.clone(),
        });
        self.cluster_count += 1;

        Ok(())
    }

    /// Adds a cluster of `count` points around `mean` with a random
    /// covariance from `covariance::random_symmetric_matrix`.
    ///
    /// `Affine::DIAGONAL` and `Affine::OFF_DIAGONAL` are the customary
    /// defaults. Keeping `diagonal.base` large relative to the off-diagonal
    /// magnitudes, so that the covariance is valid, is up to the caller.
    ///
    /// # Errors
    ///
    /// See `seed`.
    pub fn seed_in_range(
        &mut self,
        mean: &[f64],
        count: usize,
        diagonal: Affine,
        off_diagonal: Affine,
    ) -> Result<(), GenError> {
        let covariance = covariance::random_symmetric_matrix(self.dimension, diagonal, off_diagonal, &mut self.rng);
        self.seed(mean, &covariance, count)
    }

    /// Saves the generated data.
    ///
    /// Writes the points generated since the last save to `test.csv` in the
    /// current directory, then every labeled point to `<filename>.csv` and
    /// every distribution to `<filename>.mc`. See `save_with_dump`.
    ///
    /// # Errors
    ///
    /// * If any of the files cannot be created or written.
    pub fn save<P: AsRef<Path>>(&mut self, filename: P) -> Result<(), GenError> {
        self.save_with_dump(filename, DUMP_FILE_NAME)
    }

    /// Saves the generated data, with an explicit path for the auxiliary dump.
    ///
    /// After the dump is written, the points it holds are dropped from the
    /// generator so that they are not kept twice. The labeled points and the
    /// distributions are kept, so repeated saves without seeding write the
    /// same `<filename>.csv` and `<filename>.mc`.
    ///
    /// # Errors
    ///
    /// * If any of the files cannot be created or written.
    pub fn save_with_dump<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, filename: P, dump_path: Q) -> Result<(), GenError> {
        let dump_path = dump_path.as_ref();
        ftlog::info!("Writing {} points to {}...", self.raw_points.len(), dump_path.display());
        io::write_full_dump(dump_path, &self.raw_points)?;
        self.raw_points = Vec::new();

        let points_path = io::with_suffix(&filename, ".csv");
        ftlog::info!("Writing {} labeled points to {}...", self.points.len(), points_path.display());
        io::write_points(&points_path, &self.points)?;

        let params_path = io::with_suffix(&filename, ".mc");
        ftlog::info!("Writing {} distributions to {}...", self.distributions.len(), params_path.display());
        io::write_distributions(&params_path, self.dimension, &self.distributions)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimension() {
        assert!(matches!(ClusterGenerator::new(0), Err(GenError::InvalidDimension(0))));
        assert!(matches!(ClusterGenerator::with_seed(0, 42), Err(GenError::InvalidDimension(0))));
        assert!(ClusterGenerator::new(1).is_ok());
    }

    #[test]
    fn failed_seed_leaves_state() {
        let mut generator = ClusterGenerator::with_seed(2, 42).unwrap();
        generator.seed(&[0.0, 0.0], &Array2::eye(2), 3).unwrap();

        let err = generator.seed(&[0.0, 0.0, 0.0], &Array2::eye(3), 5).unwrap_err();
        assert!(matches!(
            err,
            GenError::Sampling(SamplingError::DimensionMismatch { what: "mean", .. })
        ));

        let err = generator.seed(&[0.0, 0.0], &array![[1.0, 3.0], [3.0, 1.0]], 5).unwrap_err();
        assert!(matches!(
            err,
            GenError::Sampling(SamplingError::NotPositiveSemiDefinite { .. })
        ));

        assert_eq!(generator.cluster_count(), 1);
        assert_eq!(generator.cardinality(), 3);
        assert_eq!(generator.distributions().len(), 1);
        assert_eq!(generator.raw_points().len(), 3);
    }

    #[test]
    fn lenient_checks() {
        let indefinite = array![[1.0, 3.0], [3.0, 1.0]];
        for check in [CovarianceCheck::Warn, CovarianceCheck::Ignore] {
            let mut generator = ClusterGenerator::with_seed(2, 42).unwrap().with_covariance_check(check);
            generator.seed(&[0.0, 0.0], &indefinite, 5).unwrap();
            generator.seed(&[10.0, 10.0], &Array2::eye(2), 3).unwrap();

            assert_eq!(generator.cluster_count(), 2, "{check:?}");
            assert_eq!(generator.cardinality(), 8, "{check:?}");
            assert_eq!(generator.distributions()[0].covariance, indefinite);
            let labels = generator.points().iter().map(|(label, _)| *label).collect::<Vec<_>>();
            assert_eq!(labels, [0, 0, 0, 0, 0, 1, 1, 1]);
        }
    }

    #[test]
    fn warn_matches_ignore() {
        let indefinite = array![[1.0, 3.0], [3.0, 1.0]];
        let mut warned = ClusterGenerator::with_seed(2, 7)
            .unwrap()
            .with_covariance_check(CovarianceCheck::Warn);
        let mut ignored = ClusterGenerator::with_seed(2, 7)
            .unwrap()
            .with_covariance_check(CovarianceCheck::Ignore);
        warned.seed(&[1.0, -1.0], &indefinite, 20).unwrap();
        ignored.seed(&[1.0, -1.0], &indefinite, 20).unwrap();
        assert_eq!(warned.points(), ignored.points());
    }
}
