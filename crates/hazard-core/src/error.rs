// File: crates/hazard-core/src/error.rs
// Summary: Error taxonomy for loading, validating, and rendering hazard series.

use std::path::PathBuf;

/// All failure modes surfaced by this crate. Loading is fail-fast: the first
/// error aborts the run, there is no retry or recovery layer.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("failed to read {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV in {}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{}: missing required column `{column}`", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}: row {row}: invalid date `{text}` (expected YYYY-MM-DD)", .path.display())]
    ParseDate { path: PathBuf, row: usize, text: String },

    #[error("{}: row {row}: invalid value `{text}` (expected a finite number)", .path.display())]
    ParseValue { path: PathBuf, row: usize, text: String },

    #[error("series `{title}` has no records")]
    EmptySeries { title: String },

    #[error("series `{title}` is not sorted by year ascending")]
    UnsortedSeries { title: String },

    #[error("failed to write output")]
    Io(#[from] std::io::Error),
}
