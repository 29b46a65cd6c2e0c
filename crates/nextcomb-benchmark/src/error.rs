//! Benchmark errors.

use std::io;
use std::path::PathBuf;

use nextcomb_config::ConfigError;
use thiserror::Error;

/// Errors from setting up a benchmark or writing its reports.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write report to {}: {source}", .path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
