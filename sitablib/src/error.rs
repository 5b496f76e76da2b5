//! Error types for sitablib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or writing a table
#[derive(Error, Debug)]
pub enum SitabError {
    /// A measurement that cannot be rendered as value(uncertainty)
    #[error("invalid measurement {nominal} ± {uncertainty}: {reason}")]
    InvalidMeasurement {
        nominal: f64,
        uncertainty: f64,
        reason: &'static str,
    },

    /// Separate data/decimals lists of different lengths
    #[error("{precisions} decimal precisions given for {columns} columns")]
    PrecisionCountMismatch { columns: usize, precisions: usize },

    /// Header labels don't line up with the data columns
    #[error("{labels} column captions given for {columns} columns")]
    ColumnCountMismatch { labels: usize, columns: usize },

    /// A table needs at least one column
    #[error("table has no columns")]
    NoColumns,

    /// Column-format directive that isn't of the form X.Y
    #[error("invalid table format '{0}': expected digits-before.digits-after, e.g. 4.2")]
    InvalidTableFormat(String),

    /// Failed to write the output document
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to remove a stale output document
    #[error("failed to remove '{path}': {source}")]
    Remove {
        path: PathBuf,
        source: std::io::Error,
    },
}
