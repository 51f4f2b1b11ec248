//! Text formats for generated points and their distributions.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::Gaussian;

/// Number of points rendered to text by each parallel task.
const CHUNK_SIZE: usize = 4096;

/// Formats a float as its shortest round-trip decimal string.
///
/// Finite values always carry a fractional part or an exponent (`1.0`,
/// `-0.25`). Magnitudes below `1e-4` or at least `1e16` use an exponent with
/// an explicit sign and at least two digits (`1e-05`, `1.5e+16`). Non-finite
/// values are written as `nan`, `inf` and `-inf`.
#[must_use]
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return (if x > 0.0 { "inf" } else { "-inf" }).to_string();
    }

    let magnitude = x.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let s = format!("{x:e}");
        let (mantissa, exponent) = s.split_once('e').unwrap_or((s.as_str(), "0"));
        let (sign, digits) = exponent.strip_prefix('-').map_or(("+", exponent), |d| ("-", d));
        format!("{mantissa}e{sign}{digits:0>2}")
    } else {
        let s = x.to_string();
        if s.contains('.') {
            s
        } else {
            s + ".0"
        }
    }
}

/// Appends a suffix, such as an extension, to a path.
#[must_use]
pub fn with_suffix<P: AsRef<Path>>(path: P, suffix: &str) -> PathBuf {
    let mut path = path.as_ref().as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

/// Writes rows as a comma-separated table with a header and an index column.
///
/// The header is `,0,1,...,d-1` and row `i` is `i,x_0,...,x_{d-1}`. Without
/// any rows the file holds a single empty quoted header field.
///
/// # Errors
///
/// * If the file cannot be created or written.
pub fn write_full_dump<P: AsRef<Path>>(path: P, rows: &[Vec<f64>]) -> Result<(), std::io::Error> {
    let mut out = BufWriter::new(File::create(path)?);

    if rows.is_empty() {
        writeln!(out, "\"\"")?;
    } else {
        let width = rows.iter().map(Vec::len).max().unwrap_or_default();
        let header = (0..width).map(|j| format!(",{j}")).collect::<String>();
        writeln!(out, "{header}")?;
    }

    for (i, row) in rows.iter().enumerate() {
        write!(out, "{i}")?;
        for &x in row {
            write!(out, ",{}", format_float(x))?;
        }
        writeln!(out)?;
    }

    out.flush()
}

/// Writes labeled points, one per line, as `<label> 1 <x_0> ... <x_{d-1}> `.
///
/// The constant `1` column and the trailing space are part of the format.
///
/// # Errors
///
/// * If the file cannot be created or written.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[(usize, Vec<f64>)]) -> Result<(), std::io::Error> {
    let mut out = BufWriter::new(File::create(path)?);

    let chunks = points
        .par_chunks(CHUNK_SIZE)
        .map(|chunk| {
            chunk.iter().fold(String::new(), |mut text, (label, point)| {
                text.push_str(&label.to_string());
                text.push_str(" 1 ");
                for &x in point {
                    text.push_str(&format_float(x));
                    text.push(' ');
                }
                text.push('\n');
                text
            })
        })
        .collect::<Vec<_>>();

    for chunk in chunks {
        out.write_all(chunk.as_bytes())?;
    }

    out.flush()
}

/// Writes the generating distributions of the clusters.
///
/// The file starts with `Dimension = <d>` without a line break. Each
/// distribution follows as `>>>`, the mean on one line, each covariance row
/// on its own line and an empty line. Every value is followed by a space.
///
/// # Errors
///
/// * If the file cannot be created or written.
pub fn write_distributions<P: AsRef<Path>>(
    path: P,
    dimension: usize,
    distributions: &[Gaussian],
) -> Result<(), std::io::Error> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "Dimension = {dimension}")?;

    for gaussian in distributions {
        let mut block = String::from(">>>");
        push_row(&mut block, gaussian.mean.iter().copied());
        for row in gaussian.covariance.rows() {
            push_row(&mut block, row.iter().copied());
        }
        block.push('\n');
        out.write_all(block.as_bytes())?;
    }

    out.flush()
}

/// Pushes space-terminated values and a line break.
fn push_row<I: Iterator<Item = f64>>(text: &mut String, values: I) {
    for x in values {
        text.push_str(&format_float(x));
        text.push(' ');
    }
    text.push('\n');
}
