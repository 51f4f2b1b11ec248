//! `save` writes its dump to the current directory, so this file holds a
//! single test: the working directory is shared by every test in a binary.

use ndarray::prelude::*;
use ndclusters::{ClusterGenerator, GenError, DUMP_FILE_NAME};
use tempdir::TempDir;

#[test]
fn save_in_current_dir() -> Result<(), GenError> {
    let dir = TempDir::new("ndclusters")?;
    let previous = std::env::current_dir()?;
    std::env::set_current_dir(dir.path())?;

    let count = 25;
    let mut generator = ClusterGenerator::with_seed(2, 42)?;
    generator.seed(&[0.0, 0.0], &Array2::eye(2), count)?;
    generator.save("rand")?;

    let dump = std::fs::read_to_string(dir.path().join(DUMP_FILE_NAME))?;
    assert!(dump.starts_with(",0,1\n"), "{dump}");
    assert_eq!(dump.lines().count(), count + 1);
    for (i, line) in dump.lines().skip(1).enumerate() {
        let fields = line.split(',').collect::<Vec<_>>();
        assert_eq!(fields.len(), 3, "{line}");
        assert_eq!(fields[0], i.to_string());
        assert!(fields[1..].iter().all(|x| x.parse::<f64>().is_ok()), "{line}");
    }

    let points = std::fs::read_to_string(dir.path().join("rand.csv"))?;
    assert_eq!(points.lines().count(), count);
    for line in points.lines() {
        assert!(line.starts_with("0 1 ") && line.ends_with(' '), "{line:?}");
        assert_eq!(line.split_whitespace().count(), 4);
    }

    let params = std::fs::read_to_string(dir.path().join("rand.mc"))?;
    assert_eq!(params, "Dimension = 2>>>0.0 0.0 \n1.0 0.0 \n0.0 1.0 \n\n");

    // A second save clears the dump but rewrites the same points.
    generator.save("rand")?;
    assert_eq!(std::fs::read_to_string(dir.path().join(DUMP_FILE_NAME))?, "\"\"\n");
    assert_eq!(std::fs::read_to_string(dir.path().join("rand.csv"))?, points);

    std::env::set_current_dir(previous)?;
    Ok(())
}
