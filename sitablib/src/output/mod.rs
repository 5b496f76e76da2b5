//! Output: render tables as LaTeX and write them to disk.
//!
//! This module handles the final stage of the pipeline:
//!
//! - **latex**: turns a validated [`TexTable`](crate::TexTable) into the
//!   document text (pure, no I/O)
//! - **file**: builds, renders and writes a table to its artifact path,
//!   removing the artifact instead when the header labels don't fit
//!
//! ## Example
//!
//! ```rust
//! use sitablib::{write_table, Measurement, TableOptions, WriteOutcome};
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! let path = dir.path().join("table.tex");
//!
//! let options = TableOptions::new("Values", "tab:values")
//!     .column(vec![Measurement::new(2.2, 0.02023).unwrap()], 3)
//!     .column_names(["E"]);
//!
//! let outcome = write_table(&options, &path).unwrap();
//! assert!(matches!(outcome, WriteOutcome::Written { .. }));
//! assert!(std::fs::read_to_string(&path).unwrap().contains("\\num{2.200(020)}"));
//! ```

pub mod file;
pub mod latex;

pub use file::{write_table, WriteOutcome};
pub use latex::render_document;
