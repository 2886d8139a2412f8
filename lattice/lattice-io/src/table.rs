//! Row/column table boundary type.
//!
//! [`Table`] is the shape every tabular source format is reduced to before
//! decoding: a header-metadata map plus named columns of text cells. The
//! bundled TFS and BDSIM readers produce it from files; callers wrapping
//! their own table readers can build one programmatically and hand it to
//! the `*_table_to_beamline` decoders directly.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ReadError, Result};

/// An in-memory table: header metadata, named columns, rows of text cells.
///
/// Cells are stored as text and parsed on access; the decoders only ever
/// read each cell once.
///
/// # Example
///
/// ```
/// use lattice_io::Table;
///
/// let mut table = Table::new(["NAME", "L"]).with_header("TYPE", "TWISS");
/// table.push_row(["QF.1", "0.5"]).unwrap();
///
/// assert_eq!(table.header("TYPE"), Some("TWISS"));
/// let row = table.rows().next().unwrap();
/// assert_eq!(row.text("NAME").unwrap(), "QF.1");
/// assert_eq!(row.number("L").unwrap(), 0.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Table {
    headers: HashMap<String, String>,
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given column names.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, c)| (c.clone(), i))
            .collect();
        Self {
            headers: HashMap::new(),
            columns,
            index,
            rows: Vec::new(),
        }
    }

    /// Add a header key/value pair, builder style.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_header(key, value);
        self
    }

    /// Add or replace a header key/value pair.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    /// Append a data row.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::RowShape`] if the cell count does not match
    /// the column count.
    pub fn push_row<I, S>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<String> = cells.into_iter().map(Into::into).collect();
        if cells.len() != self.columns.len() {
            return Err(ReadError::RowShape {
                expected: self.columns.len(),
                got: cells.len(),
            });
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Look up a header value.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// The column names, in declaration order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the data rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> + '_ {
        self.rows.iter().map(move |cells| Row {
            index: &self.index,
            cells,
        })
    }
}

/// Named-field view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    index: &'a HashMap<String, usize>,
    cells: &'a [String],
}

impl Row<'_> {
    /// The raw text of the cell in `column`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::MissingColumn`] if the table has no such column.
    pub fn text(&self, column: &str) -> Result<&str> {
        self.index
            .get(column)
            .and_then(|&i| self.cells.get(i))
            .map(String::as_str)
            .ok_or_else(|| ReadError::missing_column(column))
    }

    /// The cell in `column`, parsed as `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::MissingColumn`] for an absent column and
    /// [`ReadError::ParseNumber`] for a cell that is not a number.
    pub fn number(&self, column: &str) -> Result<f64> {
        let text = self.text(column)?;
        text.parse().map_err(|_| ReadError::ParseNumber {
            column: column.to_string(),
            value: text.to_string(),
        })
    }
}
