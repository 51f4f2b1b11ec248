//! Clusters with random means and random covariances.

use std::path::Path;

use ndclusters::{Affine, ClusterGenerator, CovarianceCheck, DUMP_FILE_NAME};
use rand::prelude::*;

/// The shape of a random data set.
#[derive(Debug, Clone)]
pub struct Layout {
    /// The dimension of every point.
    pub dimension: usize,
    /// The number of clusters.
    pub clusters: usize,
    /// The number of points in each cluster.
    pub count: usize,
    /// Half the side of the hypercube from which the means are drawn.
    pub spread: f64,
    /// The map applied to the diagonal of each covariance.
    pub diagonal: Affine,
    /// The map applied to the off-diagonal entries of each covariance.
    pub off_diagonal: Affine,
}

/// Seeds the clusters described by `layout` and saves them under `out_dir/name`.
pub fn run(
    out_dir: &Path,
    name: &str,
    seed: Option<u64>,
    check: CovarianceCheck,
    layout: &Layout,
) -> Result<(), String> {
    if !(layout.spread.is_finite() && layout.spread > 0.0) {
        return Err(format!("spread must be positive, got {}", layout.spread));
    }

    let (generator, mut rng) = match seed {
        Some(seed) => (
            ClusterGenerator::with_seed(layout.dimension, seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (ClusterGenerator::new(layout.dimension), StdRng::from_entropy()),
    };
    let mut generator = generator.map_err(|e| e.to_string())?.with_covariance_check(check);

    for _ in 0..layout.clusters {
        let mean = (0..layout.dimension)
            .map(|_| rng.gen_range(-layout.spread..layout.spread))
            .collect::<Vec<_>>();
        generator
            .seed_in_range(&mean, layout.count, layout.diagonal, layout.off_diagonal)
            .map_err(|e| e.to_string())?;
    }
    ftlog::info!(
        "Seeded {} clusters with {} points in {} dimensions.",
        generator.cluster_count(),
        generator.cardinality(),
        generator.dimension()
    );

    generator
        .save_with_dump(out_dir.join(name), out_dir.join(DUMP_FILE_NAME))
        .map_err(|e| e.to_string())
}
