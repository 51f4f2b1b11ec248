//! Covariance validity checks selectable from the CLI.

use ndclusters::CovarianceCheck;

/// What to do with a covariance that is not positive-semi-definite.
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum Check {
    /// Stop with an error.
    #[clap(name = "raise")]
    Raise,
    /// Log a warning and sample anyway.
    #[clap(name = "warn")]
    Warn,
    /// Sample anyway.
    #[clap(name = "ignore")]
    Ignore,
}

impl Check {
    /// Get the `CovarianceCheck` used by the generator.
    pub const fn covariance_check(self) -> CovarianceCheck {
        match self {
            Self::Raise => CovarianceCheck::Raise,
            Self::Warn => CovarianceCheck::Warn,
            Self::Ignore => CovarianceCheck::Ignore,
        }
    }
}
