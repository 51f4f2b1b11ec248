//! Tests for saving generated clusters.

use ndarray::prelude::*;
use ndclusters::{io::format_float, Affine, ClusterGenerator, GenError};
use tempdir::TempDir;

/// A seeded generator with one 2-D cluster of 100 points around the origin.
fn one_cluster() -> Result<ClusterGenerator, GenError> {
    let mut generator = ClusterGenerator::with_seed(2, 42)?;
    generator.seed(&[0.0, 0.0], &array![[2.0, 0.5], [0.5, 1.0]], 100)?;
    Ok(generator)
}

#[test]
fn one_cluster_files() -> Result<(), GenError> {
    let dir = TempDir::new("ndclusters")?;
    let mut generator = one_cluster()?;
    generator.save_with_dump(dir.path().join("t"), dir.path().join("dump.csv"))?;

    let points = std::fs::read_to_string(dir.path().join("t.csv"))?;
    let lines = points.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 100);
    for (line, (_, point)) in lines.iter().zip(generator.points()) {
        assert!(line.starts_with("0 1 "), "{line}");
        assert!(line.ends_with(' '), "{line:?}");
        let expected = format!("0 1 {} {} ", format_float(point[0]), format_float(point[1]));
        assert_eq!(*line, expected);
    }

    let params = std::fs::read_to_string(dir.path().join("t.mc"))?;
    assert!(params.starts_with("Dimension = 2>>>"));
    assert_eq!(params.matches(">>>").count(), 1);

    let block = params.split(">>>").nth(1).unwrap_or_default();
    let block_lines = block.split('\n').collect::<Vec<_>>();
    assert_eq!(block_lines, ["0.0 0.0 ", "2.0 0.5 ", "0.5 1.0 ", "", ""]);

    Ok(())
}

#[test]
fn many_clusters_files() -> Result<(), GenError> {
    let dir = TempDir::new("ndclusters")?;
    let mut generator = ClusterGenerator::with_seed(3, 0)?;
    let counts = [5, 0, 7];
    for (c, &count) in counts.iter().enumerate() {
        let mean = vec![c as f64; 3];
        generator.seed_in_range(&mean, count, Affine::new(50.0, 1.0), Affine::new(1.0, 1.0))?;
    }
    generator.save_with_dump(dir.path().join("rand"), dir.path().join("test.csv"))?;

    let points = std::fs::read_to_string(dir.path().join("rand.csv"))?;
    let labels = points
        .lines()
        .map(|line| line.split(' ').next().unwrap_or_default().to_string())
        .collect::<Vec<_>>();
    assert_eq!(labels, [vec!["0"; 5], vec!["2"; 7]].concat());
    for line in points.lines() {
        // label, placeholder, three coordinates and the empty field after the trailing space
        assert_eq!(line.split(' ').count(), 6);
    }

    let params = std::fs::read_to_string(dir.path().join("rand.mc"))?;
    let blocks = params.split(">>>").collect::<Vec<_>>();
    assert_eq!(blocks[0], "Dimension = 3");
    assert_eq!(blocks.len(), 4);
    for (c, block) in blocks[1..].iter().enumerate() {
        let rows = block.lines().collect::<Vec<_>>();
        assert_eq!(rows.len(), 5, "{block:?}");
        assert_eq!(rows[0], format!("{0} {0} {0} ", format_float(c as f64)));
        for row in &rows[1..4] {
            assert_eq!(row.split_whitespace().count(), 3);
        }
        assert!(rows[4].is_empty());
        assert!(block.ends_with("\n\n"));
    }

    Ok(())
}

#[test]
fn dump_is_cleared() -> Result<(), GenError> {
    let dir = TempDir::new("ndclusters")?;
    let dump = dir.path().join("dump.csv");
    let mut generator = one_cluster()?;

    generator.save_with_dump(dir.path().join("t"), &dump)?;
    let table = std::fs::read_to_string(&dump)?;
    let rows = table.lines().collect::<Vec<_>>();
    assert_eq!(rows.len(), 101);
    assert_eq!(rows[0], ",0,1");
    for (i, row) in rows[1..].iter().enumerate() {
        let (index, _) = row.split_once(',').unwrap_or_default();
        assert_eq!(index, i.to_string());
        assert_eq!(row.split(',').count(), 3);
    }

    assert!(generator.raw_points().is_empty());
    assert_eq!(generator.cardinality(), 100);
    assert_eq!(generator.distributions().len(), 1);

    generator.seed(&[5.0, 5.0], &Array2::eye(2), 3)?;
    assert_eq!(generator.raw_points().len(), 3);
    generator.save_with_dump(dir.path().join("t"), &dump)?;
    assert_eq!(std::fs::read_to_string(&dump)?.lines().count(), 4);
    assert_eq!(std::fs::read_to_string(dir.path().join("t.csv"))?.lines().count(), 103);

    Ok(())
}

#[test]
fn repeated_saves_match() -> Result<(), GenError> {
    let dir = TempDir::new("ndclusters")?;
    let mut generator = one_cluster()?;

    generator.save_with_dump(dir.path().join("t"), dir.path().join("dump.csv"))?;
    let points = std::fs::read(dir.path().join("t.csv"))?;
    let params = std::fs::read(dir.path().join("t.mc"))?;

    generator.save_with_dump(dir.path().join("t"), dir.path().join("dump.csv"))?;
    assert_eq!(std::fs::read(dir.path().join("t.csv"))?, points);
    assert_eq!(std::fs::read(dir.path().join("t.mc"))?, params);

    Ok(())
}

#[test]
fn unwritable_path() -> Result<(), GenError> {
    let dir = TempDir::new("ndclusters")?;
    let mut generator = one_cluster()?;

    let missing = dir.path().join("missing").join("t");
    let err = generator
        .save_with_dump(&missing, dir.path().join("dump.csv"))
        .unwrap_err();
    assert!(matches!(err, GenError::Io(_)));

    Ok(())
}
