//! Writing rendered tables to their artifact path.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::SitabError;
use crate::options::TableOptions;
use crate::table::TexTable;
use crate::Result;

use super::latex::render_document;

/// What [`write_table`] did with the artifact path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum WriteOutcome {
    /// The document was written (overwriting any previous one)
    Written { path: PathBuf },
    /// Header labels didn't match the columns; no document exists at `path`
    Skipped {
        path: PathBuf,
        labels: usize,
        columns: usize,
    },
}

impl WriteOutcome {
    pub fn path(&self) -> &Path {
        match self {
            WriteOutcome::Written { path } | WriteOutcome::Skipped { path, .. } => path,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written { .. })
    }
}

/// Remove `path` if it exists.
fn remove_stale(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(source) => Err(SitabError::Remove {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Build, render and write a table to `path`.
///
/// The document is rendered in memory and written in one go, replacing any
/// previous content. If the number of header labels differs from the number
/// of columns the table is not produced: a warning is logged, any existing
/// file at `path` is removed, and [`WriteOutcome::Skipped`] is returned.
///
/// Invalid input that can't be recovered from (no columns at all) and I/O
/// failures are returned as errors.
pub fn write_table(options: &TableOptions, path: impl AsRef<Path>) -> Result<WriteOutcome> {
    let path = path.as_ref();

    let table = match TexTable::build(options) {
        Ok(table) => table,
        Err(SitabError::ColumnCountMismatch { labels, columns }) => {
            tracing::warn!(
                path = %path.display(),
                labels,
                columns,
                "column captions don't match columns, no output file produced"
            );
            remove_stale(path)?;
            return Ok(WriteOutcome::Skipped {
                path: path.to_path_buf(),
                labels,
                columns,
            });
        }
        Err(e) => return Err(e),
    };

    let document = render_document(&table);
    fs::write(path, document).map_err(|source| SitabError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "LaTeX code saved");
    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
    })
}
