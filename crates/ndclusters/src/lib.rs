#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic,
    clippy::nursery,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![doc = include_str!("../README.md")]

pub mod covariance;
mod error;
mod generator;
pub mod io;
pub mod linalg;
pub mod normal;

pub use covariance::Affine;
pub use error::{GenError, SamplingError};
pub use generator::{ClusterGenerator, Gaussian, DUMP_FILE_NAME};
pub use normal::{CovarianceCheck, MultivariateNormal};

/// The version of the crate.
pub const VERSION: &str = "0.1.0";
