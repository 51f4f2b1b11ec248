//! The commands under the `ndclusters` CLI.

pub mod example;
pub mod random;

use clap::Subcommand;

/// The data sets the CLI can generate.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// The eleven fixed two-dimensional clusters of the reference data set.
    Example {
        /// The name of the output files, without extension.
        #[arg(short('n'), long, default_value = "rand")]
        name: String,
    },
    /// Clusters with random means and random covariances.
    Random {
        /// The name of the output files, without extension.
        #[arg(short('n'), long, default_value = "rand")]
        name: String,

        /// The dimension of every point.
        #[arg(short('d'), long)]
        dimension: usize,

        /// The number of clusters.
        #[arg(short('k'), long)]
        clusters: usize,

        /// The number of points in each cluster.
        #[arg(short('m'), long)]
        count: usize,

        /// Means are drawn uniformly from `[-spread, spread)` along each axis.
        #[arg(short('r'), long, default_value_t = 50.0)]
        spread: f64,

        /// Base of the diagonal entries of each covariance.
        #[arg(long, default_value_t = 3.0)]
        diag_base: f64,

        /// Scale of the diagonal entries of each covariance.
        #[arg(long, default_value_t = 3.0)]
        diag_scale: f64,

        /// Base of the off-diagonal entries of each covariance.
        #[arg(long, default_value_t = 1.0)]
        off_base: f64,

        /// Scale of the off-diagonal entries of each covariance.
        #[arg(long, default_value_t = 1.0)]
        off_scale: f64,
    },
}
