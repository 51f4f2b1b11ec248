//! Errors raised while building, seeding and saving clusters.

/// Reasons a multivariate normal distribution could not be sampled.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingError {
    /// A mean or covariance whose shape disagrees with the expected dimension.
    DimensionMismatch {
        /// Which input was malformed.
        what: &'static str,
        /// The expected number of entries along each axis.
        expected: usize,
        /// The shape that was found.
        found: Vec<usize>,
    },
    /// A covariance that is not symmetric positive-semi-definite.
    NotPositiveSemiDefinite {
        /// The smallest eigenvalue of the symmetrized covariance.
        min_eigenvalue: f64,
    },
    /// A mean or covariance containing NaN or infinite values.
    NonFinite(&'static str),
}

impl std::fmt::Display for SamplingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch { what, expected, found } => write!(
                f,
                "{what} has shape {found:?} but the distribution has dimension {expected}"
            ),
            Self::NotPositiveSemiDefinite { min_eigenvalue } => write!(
                f,
                "covariance is not symmetric positive-semi-definite (smallest eigenvalue {min_eigenvalue:.12e})"
            ),
            Self::NonFinite(what) => write!(f, "{what} contains non-finite values"),
        }
    }
}

impl std::error::Error for SamplingError {}

/// Errors from the cluster generator.
#[derive(Debug)]
pub enum GenError {
    /// The generator was asked for fewer than one dimension.
    InvalidDimension(usize),
    /// The multivariate normal sampler rejected its parameters.
    Sampling(SamplingError),
    /// An output file could not be opened or written.
    Io(std::io::Error),
}

impl std::fmt::Display for GenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension(dim) => write!(f, "dimension should be greater than 0, got {dim}"),
            Self::Sampling(err) => write!(f, "sampling failed: {err}"),
            Self::Io(err) => write!(f, "i/o failed: {err}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidDimension(_) => None,
            Self::Sampling(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<SamplingError> for GenError {
    fn from(err: SamplingError) -> Self {
        Self::Sampling(err)
    }
}

impl From<std::io::Error> for GenError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
