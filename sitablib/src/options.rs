//! Input options for building a table.
//!
//! This module contains the configuration types that describe a table:
//! its data columns, caption and label, header labels and the two layout
//! knobs (column-format directive and float placement).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SitabError;
use crate::measurement::{Column, Measurement};
use crate::Result;

/// The siunitx `table-format` directive: digits before and after the point.
///
/// Parsed from and displayed as `X.Y`; defaults to `4.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TableFormat {
    /// Digits before the decimal point
    pub integer: u32,
    /// Digits after the decimal point
    pub decimal: u32,
}

impl TableFormat {
    pub fn new(integer: u32, decimal: u32) -> Self {
        Self { integer, decimal }
    }
}

impl Default for TableFormat {
    fn default() -> Self {
        Self::new(4, 2)
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.integer, self.decimal)
    }
}

impl FromStr for TableFormat {
    type Err = SitabError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SitabError::InvalidTableFormat(s.to_string());
        let trimmed = s.trim();
        let (integer, decimal) = trimmed.split_once('.').unwrap_or((trimmed, "0"));
        Ok(Self {
            integer: integer.parse().map_err(|_| invalid())?,
            decimal: decimal.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for TableFormat {
    type Error = SitabError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TableFormat> for String {
    fn from(format: TableFormat) -> Self {
        format.to_string()
    }
}

/// Where LaTeX may place the table float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    /// Let LaTeX float the table (`\begin{table}`)
    #[default]
    Float,
    /// Pin the table where it appears (`\begin{table}[H]`, needs `float`)
    Here,
}

impl Placement {
    /// Placement qualifier appended to `\begin{table}`.
    pub fn qualifier(&self) -> &'static str {
        match self {
            Placement::Float => "",
            Placement::Here => "[H]",
        }
    }
}

/// Everything needed to build one table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Data columns, left to right, each with its own precision
    pub columns: Vec<Column>,
    /// Caption text
    pub caption: String,
    /// Cross-reference label (e.g. `tab:values`)
    pub label: String,
    /// Header labels, one per column
    pub column_names: Vec<String>,
    /// siunitx `table-format` directive
    pub table_format: TableFormat,
    /// Float placement
    pub placement: Placement,
}

impl TableOptions {
    /// Create options with a caption and label and no columns yet.
    pub fn new(caption: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Build options from separate data and precision lists.
    ///
    /// `data[i]` is displayed with `decimals[i]` digits; the two lists must
    /// have the same length.
    ///
    /// ```rust
    /// use sitablib::{Measurement, SitabError, TableOptions};
    ///
    /// let a = vec![Measurement::new(1.0, 0.2).unwrap()];
    /// let b = vec![Measurement::new(5.0, 5.0).unwrap()];
    ///
    /// let options = TableOptions::from_parts(vec![a.clone(), b.clone()], &[3, 0]).unwrap();
    /// assert_eq!(options.columns.len(), 2);
    ///
    /// let err = TableOptions::from_parts(vec![a, b], &[3]).unwrap_err();
    /// assert!(matches!(err, SitabError::PrecisionCountMismatch { columns: 2, precisions: 1 }));
    /// ```
    pub fn from_parts(data: Vec<Vec<Measurement>>, decimals: &[usize]) -> Result<Self> {
        if data.len() != decimals.len() {
            return Err(SitabError::PrecisionCountMismatch {
                columns: data.len(),
                precisions: decimals.len(),
            });
        }

        let columns = data
            .into_iter()
            .zip(decimals)
            .map(|(values, &precision)| Column::new(values, precision))
            .collect();

        Ok(Self {
            columns,
            ..Self::default()
        })
    }

    /// Builder: append a column
    pub fn column(mut self, values: Vec<Measurement>, precision: usize) -> Self {
        self.columns.push(Column::new(values, precision));
        self
    }

    /// Builder: replace all columns
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Builder: set caption
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    /// Builder: set label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder: set header labels
    pub fn column_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: set the `table-format` directive
    pub fn table_format(mut self, format: TableFormat) -> Self {
        self.table_format = format;
        self
    }

    /// Builder: set float placement
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }
}
