//! # sitablib
//!
//! Turn columns of measurements with uncertainties into LaTeX tables.
//!
//! ## Overview
//!
//! Each cell is written in the compact value(uncertainty) notation understood
//! by siunitx, e.g. `\num{2.200(020)}` for 2.200 ± 0.020. Tables use booktabs
//! rules and one `S` column per data column:
//!
//! - **Measurement**: a nominal value and its non-negative uncertainty
//! - **Column**: measurements sharing one decimal precision
//! - **TableOptions**: columns, caption, label, header labels and layout
//! - **TexTable**: formatted cells checked against the header labels
//!
//! ## Features
//!
//! - **Ragged columns**: shorter columns are padded with blank cells
//! - **Exact values**: a zero uncertainty prints the bare number
//! - **Safe output**: a label/column mismatch never leaves a malformed file
//!
//! ## Example
//!
//! ```rust
//! use sitablib::{render_document, Column, TableOptions, TexTable};
//!
//! let energies = Column::from_pairs([(1.0, 0.19782), (2.2, 0.02023)], 3).unwrap();
//! let counts = Column::from_pairs([(5.0, 5.0), (4.0, 4.0)], 0).unwrap();
//!
//! let options = TableOptions::new("Measured values.", "tab:values")
//!     .columns(vec![energies, counts])
//!     .column_names(["$E$ / keV", "Counts"]);
//!
//! let table = TexTable::build(&options).unwrap();
//! let doc = render_document(&table);
//! assert!(doc.contains("\\num{2.200(020)} & \\num{4(4)} \\\\"));
//! ```

pub mod error;
pub mod format;
pub mod measurement;
pub mod options;
pub mod output;
pub mod table;

pub use error::SitabError;
pub use format::format_measurement;
pub use measurement::{Column, Measurement};
pub use options::{Placement, TableFormat, TableOptions};
pub use output::{render_document, write_table, WriteOutcome};
pub use table::{tokenize, TexTable};

/// Result type for sitablib operations
pub type Result<T> = std::result::Result<T, SitabError>;
