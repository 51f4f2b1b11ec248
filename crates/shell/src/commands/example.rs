//! The reference data set of eleven two-dimensional clusters.

use std::path::Path;

use ndclusters::{Affine, ClusterGenerator, CovarianceCheck, DUMP_FILE_NAME};

/// Mean, number of points, diagonal and off-diagonal maps of each cluster.
const CLUSTERS: [([f64; 2], usize, (f64, f64), (f64, f64)); 11] = [
    ([0.0, 0.0], 15_000, (3.0, 3.0), (1.0, 1.0)),
    ([11.0, 2.0], 10_000, (3.0, 3.0), (1.0, 2.0)),
    ([3.0, 10.0], 20_000, (3.0, 3.0), (2.0, 1.0)),
    ([12.0, 12.0], 10_000, (3.0, 3.0), (1.0, 2.0)),
    ([23.0, 15.0], 15_000, (3.0, 3.0), (1.0, 2.0)),
    ([25.0, 30.0], 10_000, (3.0, 3.0), (1.0, 2.0)),
    ([22.0, 40.0], 15_000, (6.0, 6.0), (3.0, 2.0)),
    ([-3.0, 40.0], 15_000, (20.0, 6.0), (5.0, 2.0)),
    ([34.0, 10.0], 25_000, (2.0, 8.0), (3.0, 2.0)),
    ([24.0, 53.0], 15_000, (10.0, 7.0), (3.0, 2.0)),
    ([54.0, -83.0], 15_000, (30.0, 20.0), (3.0, 2.0)),
];

/// Seeds the eleven clusters and saves them under `out_dir/name`.
pub fn run(out_dir: &Path, name: &str, seed: Option<u64>, check: CovarianceCheck) -> Result<(), String> {
    let generator = match seed {
        Some(seed) => ClusterGenerator::with_seed(2, seed),
        None => ClusterGenerator::new(2),
    };
    let mut generator = generator.map_err(|e| e.to_string())?.with_covariance_check(check);

    for (mean, count, diagonal, off_diagonal) in CLUSTERS {
        generator
            .seed_in_range(&mean, count, Affine::from(diagonal), Affine::from(off_diagonal))
            .map_err(|e| e.to_string())?;
    }
    ftlog::info!(
        "Seeded {} clusters with {} points.",
        generator.cluster_count(),
        generator.cardinality()
    );

    generator
        .save_with_dump(out_dir.join(name), out_dir.join(DUMP_FILE_NAME))
        .map_err(|e| e.to_string())
}
