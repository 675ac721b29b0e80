//! Grid serialization to CSV and JSON text
//!
//! Both outputs are pure functions of the [`Grid`]; the host decides what to
//! do with the resulting string (in the browser build, trigger a download).
//!
//! [`to_csv`] is the inverse of the parser's cell splitter for everything
//! the parser itself produces: cells get their quotes doubled and are
//! wrapped in `"..."` exactly when they contain a comma, quote, or newline,
//! so `parse(to_csv(g)) == g` holds for any grid whose cells are free of
//! backslash-before-quote sequences and already trimmed.

use serde_json::{Map, Value};

use crate::grid::Grid;

/// Serialize a grid back to CSV text.
///
/// Headers are joined with `,` as-is; data cells are escaped. The header
/// line and the row block are joined with a single `\n`, so a grid with no
/// rows serializes to the header line followed by a trailing newline (which
/// the parser drops again as a blank line).
///
/// # Example
///
/// ```
/// use csvgrid::{parse, to_csv};
///
/// let grid = parse("h1,h2\n\"a,b\",c");
/// assert_eq!(to_csv(&grid), "h1,h2\n\"a,b\",c");
/// ```
pub fn to_csv(grid: &Grid) -> String {
    let headers = grid.headers.join(",");
    let rows = grid
        .rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| escape_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n{}", headers, rows)
}

/// Quote-escape a single cell for CSV output.
///
/// Doubles every `"`, then wraps the cell in quotes iff it contains a
/// comma, a quote, or a newline character. Cells that need no quoting pass
/// through byte-for-byte.
fn escape_cell(cell: &str) -> String {
    if needs_quoting(cell) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// True when a cell cannot survive unquoted.
fn needs_quoting(cell: &str) -> bool {
    cell.bytes().any(|b| matches!(b, b',' | b'"' | b'\n' | b'\r'))
}

/// Serialize a grid as 2-space-indented JSON: an array with one object per
/// row, mapping each header to the row's cell at the same position
/// (missing trailing cells become `""`).
///
/// Object keys follow header order; a duplicate header collapses to the
/// last value, the way repeated assignment to one key does.
///
/// # Example
///
/// ```
/// use csvgrid::{parse, to_json};
///
/// let grid = parse("a,b\n1,2");
/// let json = to_json(&grid).unwrap();
/// assert_eq!(json, "[\n  {\n    \"a\": \"1\",\n    \"b\": \"2\"\n  }\n]");
/// ```
pub fn to_json(grid: &Grid) -> serde_json::Result<String> {
    let records: Vec<Map<String, Value>> = grid
        .rows
        .iter()
        .map(|row| {
            grid.headers
                .iter()
                .enumerate()
                .map(|(index, header)| {
                    let cell = row.get(index).cloned().unwrap_or_default();
                    (header.clone(), Value::String(cell))
                })
                .collect()
        })
        .collect();

    serde_json::to_string_pretty(&records)
}
