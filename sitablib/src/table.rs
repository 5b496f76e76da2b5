//! Table-ready token data.
//!
//! This module provides `TexTable`, the validated intermediate between
//! raw measurement columns and the rendered LaTeX document.
//!
//! The data flow is:
//! 1. TableOptions (measurement columns + precisions, labels, layout)
//! 2. Tokens (one `\num{...}` string per measurement, per column)
//! 3. TexTable (tokens checked against the header labels)
//! 4. Document text (see [`crate::output`])

use serde::Serialize;

use crate::error::SitabError;
use crate::format::format_measurement;
use crate::measurement::Column;
use crate::options::{Placement, TableFormat, TableOptions};
use crate::Result;

/// Format every measurement of every column.
///
/// Columns keep their own lengths; nothing is padded here.
pub fn tokenize(columns: &[Column]) -> Vec<Vec<String>> {
    columns
        .iter()
        .map(|column| {
            column
                .values
                .iter()
                .map(|m| format_measurement(m, column.precision))
                .collect()
        })
        .collect()
}

/// Tokens plus everything the renderer needs, with labels matching columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TexTable {
    pub caption: String,
    pub label: String,
    pub table_format: TableFormat,
    pub placement: Placement,
    /// Header labels, one per column
    pub headers: Vec<String>,
    /// Formatted cells per column (columns may differ in length)
    pub columns: Vec<Vec<String>>,
}

impl TexTable {
    /// Tokenize the columns and check them against the header labels.
    ///
    /// ```rust
    /// use sitablib::{Measurement, SitabError, TableOptions, TexTable};
    ///
    /// let options = TableOptions::new("Values", "tab:values")
    ///     .column(vec![Measurement::new(2.2, 0.02023).unwrap()], 3)
    ///     .column_names(["E"]);
    /// let table = TexTable::build(&options).unwrap();
    /// assert_eq!(table.columns[0][0], "\\num{2.200(020)}");
    ///
    /// let mismatched = options.column_names(["E", "extra"]);
    /// assert!(matches!(
    ///     TexTable::build(&mismatched),
    ///     Err(SitabError::ColumnCountMismatch { labels: 2, columns: 1 })
    /// ));
    /// ```
    pub fn build(options: &TableOptions) -> Result<Self> {
        let columns = tokenize(&options.columns);
        tracing::debug!(
            columns = columns.len(),
            rows = columns.iter().map(Vec::len).max().unwrap_or(0),
            "tokenized measurements"
        );

        // Checked before emptiness so labels without data count as a mismatch.
        if columns.len() != options.column_names.len() {
            return Err(SitabError::ColumnCountMismatch {
                labels: options.column_names.len(),
                columns: columns.len(),
            });
        }
        if columns.is_empty() {
            return Err(SitabError::NoColumns);
        }

        Ok(TexTable {
            caption: options.caption.clone(),
            label: options.label.clone(),
            table_format: options.table_format,
            placement: options.placement,
            headers: options.column_names.clone(),
            columns,
        })
    }

    /// Number of body rows: the length of the longest column.
    pub fn row_count(&self) -> usize {
        self.columns.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Cells of body row `index`, with blanks where a column has run out.
    pub fn row(&self, index: usize) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.get(index).map(String::as_str).unwrap_or(""))
            .collect()
    }

    /// All body rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        (0..self.row_count()).map(move |index| self.row(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;

    fn column(len: usize, precision: usize) -> Column {
        let values = (0..len)
            .map(|i| Measurement::new(i as f64, 0.4).unwrap())
            .collect();
        Column::new(values, precision)
    }

    fn ragged_options() -> TableOptions {
        TableOptions::new("Ragged", "tab:ragged")
            .columns(vec![column(5, 1), column(4, 1), column(5, 0)])
            .column_names(["a", "b", "c"])
    }

    #[test]
    fn test_tokenize_preserves_lengths() {
        let tokens = tokenize(&[column(3, 1), column(0, 2), column(7, 0)]);
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].len(), 3);
        assert_eq!(tokens[1].len(), 0);
        assert_eq!(tokens[2].len(), 7);
    }

    #[test]
    fn test_tokenize_uses_column_precision() {
        let tokens = tokenize(&[column(2, 1), column(2, 0)]);
        assert_eq!(tokens[0][1], "\\num{1.0(4)}");
        assert_eq!(tokens[1][1], "\\num{1(0)}");
    }

    #[test]
    fn test_ragged_rows_padded() {
        let table = TexTable::build(&ragged_options()).unwrap();
        assert_eq!(table.row_count(), 5);

        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(rows[3][1], "\\num{3.0(4)}");
        assert_eq!(rows[4][1], "");
        assert_eq!(rows[4][0], "\\num{4.0(4)}");
        assert_eq!(rows[4][2], "\\num{4(0)}");
    }

    #[test]
    fn test_label_mismatch() {
        let options = ragged_options().column_names(["a", "b"]);
        match TexTable::build(&options) {
            Err(SitabError::ColumnCountMismatch { labels, columns }) => {
                assert_eq!(labels, 2);
                assert_eq!(columns, 3);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_no_columns() {
        let options = TableOptions::new("Empty", "tab:empty");
        assert!(matches!(
            TexTable::build(&options),
            Err(SitabError::NoColumns)
        ));
    }

    #[test]
    fn test_labels_without_columns_is_mismatch() {
        let options = TableOptions::new("Empty", "tab:empty").column_names(["a", "b"]);
        assert!(matches!(
            TexTable::build(&options),
            Err(SitabError::ColumnCountMismatch { labels: 2, columns: 0 })
        ));
    }

    #[test]
    fn test_all_columns_empty() {
        let options = TableOptions::new("Empty", "tab:empty")
            .columns(vec![column(0, 1)])
            .column_names(["a"]);
        let table = TexTable::build(&options).unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.rows().count(), 0);
    }
}
