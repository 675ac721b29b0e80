//! In-memory grid model
//!
//! A [`Grid`] is the structured form of one loaded CSV file: an ordered
//! header list plus an ordered list of rows, where every cell is a plain
//! string. The grid is a value type — parsing creates one, edits produce
//! mutations on it, serialization reads it. Loading a new file replaces the
//! whole grid; there is no merge.
//!
//! # Ragged rows
//!
//! The parser derives each row independently, so a row may carry fewer or
//! more cells than there are headers. This is a defined policy, not an
//! error: [`Grid::cell`] returns `""` for a column index past the end of a
//! row, and cells beyond the header count are retained but unreachable by
//! header. Rows that go through the mutation API ([`Grid::append_row`],
//! [`Grid::replace_row`]) are normalized to exactly header width.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One row of cell values, ordered to match [`Grid::headers`].
pub type Row = Vec<String>;

/// Structured representation of a CSV file: headers plus rows of cells.
///
/// Headers are fixed at parse time; the core exposes no column operations.
/// Uniqueness of header names is recommended but not enforced — duplicate
/// headers collapse to the last value when converted to JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    /// Column names, in file order.
    pub headers: Vec<String>,
    /// Data rows, in file order.
    pub rows: Vec<Row>,
}

/// Error type for grid mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row index passed to [`Grid::replace_row`] was not a valid index
    /// into [`Grid::rows`].
    RowOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of rows in the grid at the time of the call.
        len: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::RowOutOfRange { index, len } => {
                write!(f, "row index {} out of range for grid with {} rows", index, len)
            }
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Create a grid from parts.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// True when the grid has neither headers nor rows (the degenerate grid
    /// produced by parsing empty input).
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Number of data rows (the header line is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, i.e. the header count.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Cell value at `(row, col)`, or `""` when the row is shorter than the
    /// header list at that position or the coordinates are out of range.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Build a row from a map of header name → field value.
    ///
    /// Each header is looked up in `fields`; headers missing from the map
    /// become `""`. The result always has exactly one cell per header, so it
    /// satisfies the row-width invariant by construction. This is how edit
    /// and add-row form submissions turn into rows.
    pub fn row_from_fields(&self, fields: &HashMap<String, String>) -> Row {
        self.headers
            .iter()
            .map(|header| fields.get(header).cloned().unwrap_or_default())
            .collect()
    }

    /// Append a row at the end of the grid.
    ///
    /// The row is normalized to header width first (padded with `""` or
    /// truncated), so the row-length invariant holds even for rows built
    /// without [`Grid::row_from_fields`].
    pub fn append_row(&mut self, row: Row) {
        let row = self.normalize(row);
        self.rows.push(row);
    }

    /// Replace the row at `index` wholesale.
    ///
    /// The UI derives indices from the rendered grid, so an out-of-range
    /// index is a caller bug; it is guarded here rather than allowed to
    /// panic.
    pub fn replace_row(&mut self, index: usize, row: Row) -> Result<(), GridError> {
        if index >= self.rows.len() {
            return Err(GridError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        self.rows[index] = self.normalize(row);
        Ok(())
    }

    /// Pad or truncate a row to exactly `headers.len()` cells.
    fn normalize(&self, mut row: Row) -> Row {
        row.resize(self.headers.len(), String::new());
        row
    }
}
