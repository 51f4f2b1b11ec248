//! Logging setup for the CLI.

use std::path::{Path, PathBuf};

use ftlog::{
    appender::{FileAppender, Period},
    LevelFilter, LoggerGuard,
};

/// The name of the directory, under the output directory, holding the logs.
const LOGS_DIR: &str = "logs";

/// Returns the paths of the main log and of the appender diagnostics log for
/// a run named `name` writing to `out_dir`.
fn log_paths(out_dir: &Path, name: &str) -> (PathBuf, PathBuf) {
    let log_path = out_dir.join(LOGS_DIR).join(format!("{name}.log"));
    let err_path = log_path.with_extension("err.log");
    (log_path, err_path)
}

/// Starts logging to `<out_dir>/logs/<name>.log`, rotated daily.
///
/// Records from the appender itself go to `<name>.err.log` next to it.
/// `verbose` lowers the level from `Info` to `Debug`.
///
/// # Errors
///
/// - If the logs directory cannot be created.
/// - If a logger was already initialized.
pub fn configure_logger(out_dir: &Path, name: &str, verbose: bool) -> Result<(LoggerGuard, PathBuf), String> {
    let (log_path, err_path) = log_paths(out_dir, name);
    if let Some(logs_dir) = log_path.parent() {
        std::fs::create_dir_all(logs_dir).map_err(|e| format!("Cannot create {}: {e}", logs_dir.display()))?;
    }

    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let guard = ftlog::Builder::new()
        .max_log_level(level)
        .root(FileAppender::builder().path(&log_path).rotate(Period::Day).build())
        .filter("ftlog::appender", "ftlog-appender", LevelFilter::Debug)
        .appender("ftlog-appender", FileAppender::new(err_path))
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok((guard, log_path))
}
