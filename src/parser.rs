//! Hand-written CSV tokenizer
//!
//! Two passes over the input, both quote-aware:
//!
//! 1. **Line splitting** — walk the text once, toggling an in-quotes flag on
//!    each `"` not preceded by `\`; `\n`/`\r` end a line only outside quotes
//!    (`\r\n` counts as one terminator), and lines that trim to nothing are
//!    dropped.
//! 2. **Cell splitting** — per line: `,` separates fields only outside
//!    quotes, `""` inside a quoted section decodes to a literal `"`, and
//!    every finished cell is trimmed of surrounding whitespace.
//!
//! The first line's cells become the grid headers; the rest become rows.
//!
//! Two deliberate quirks are carried over from the system this parser has to
//! stay byte-compatible with, and must not be "fixed":
//!
//! - A `"` preceded by a literal `\` never toggles quote state and is kept
//!   in the cell as-is (the backslash included). RFC 4180 knows no backslash
//!   escaping; existing files do.
//! - Unquoted cells containing `,` or newlines misparse. That is the input
//!   contract: the serializer always quotes such cells, so anything this
//!   crate wrote reads back correctly.
//!
//! Malformed input is never an error; every ambiguity resolves through the
//! policies above. Empty input yields the empty [`Grid`].

use memchr::{memchr2, memchr3};

use crate::grid::{Grid, Row};

/// Logging macros - no-op when logging feature is disabled
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Logging macros - use log crate when logging feature is enabled
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

/// Parse CSV text into a [`Grid`].
///
/// Never fails: the first non-blank line becomes the headers, every further
/// non-blank line becomes one row, and input with no lines at all produces
/// `Grid::default()` (empty headers, no rows).
///
/// # Example
///
/// ```
/// use csvgrid::parse;
///
/// let grid = parse("name,age\nAlice,30\n\"Bob, Jr.\",25");
/// assert_eq!(grid.headers, ["name", "age"]);
/// assert_eq!(grid.rows[1][0], "Bob, Jr.");
/// ```
pub fn parse(text: &str) -> Grid {
    let lines = split_lines(text);
    let Some((first, rest)) = lines.split_first() else {
        return Grid::default();
    };

    let headers = split_cells(first);
    let rows: Vec<Row> = rest.iter().map(|line| split_cells(line)).collect();

    log_debug!(
        "parsed {} byte(s) into {} column(s) x {} row(s)",
        text.len(),
        headers.len(),
        rows.len()
    );

    Grid::new(headers, rows)
}

/// Pass 1: split raw text into logical lines, honoring quoted newlines.
///
/// Quotes stay in the line text; pass 2 strips them. Blank lines (anything
/// that trims to empty) are dropped, so a deliberately empty CSV row is
/// indistinguishable from a stray blank line.
fn split_lines(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut in_quotes = false;
    let mut pos = 0;

    // Jump between the only bytes that matter; everything in between is
    // copied wholesale. All specials are ASCII, so byte offsets are always
    // char boundaries.
    while pos < bytes.len() {
        let Some(offset) = memchr3(b'"', b'\n', b'\r', &bytes[pos..]) else {
            line.push_str(&text[pos..]);
            break;
        };
        let at = pos + offset;
        line.push_str(&text[pos..at]);

        match bytes[at] {
            b'"' => {
                // Naive escape check: any quote not preceded by a literal
                // backslash toggles, even inside a quoted section.
                if at == 0 || bytes[at - 1] != b'\\' {
                    in_quotes = !in_quotes;
                }
                line.push('"');
                pos = at + 1;
            }
            terminator => {
                if in_quotes {
                    // Quoted newline: literal cell content.
                    line.push(terminator as char);
                    pos = at + 1;
                } else {
                    if !line.trim().is_empty() {
                        lines.push(std::mem::take(&mut line));
                    } else {
                        line.clear();
                    }
                    // \r\n is one terminator
                    pos = if terminator == b'\r' && bytes.get(at + 1) == Some(&b'\n') {
                        at + 2
                    } else {
                        at + 1
                    };
                }
            }
        }
    }

    if !line.trim().is_empty() {
        lines.push(line);
    }
    lines
}

/// Pass 2: split one logical line into trimmed cells.
fn split_cells(line: &str) -> Row {
    let bytes = line.as_bytes();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(offset) = memchr2(b'"', b',', &bytes[pos..]) else {
            cell.push_str(&line[pos..]);
            break;
        };
        let at = pos + offset;
        cell.push_str(&line[pos..at]);

        match bytes[at] {
            b'"' if at == 0 || bytes[at - 1] != b'\\' => {
                if !in_quotes {
                    in_quotes = true;
                    pos = at + 1;
                } else if bytes.get(at + 1) == Some(&b'"') {
                    // Doubled quote inside a quoted section: one literal "
                    cell.push('"');
                    pos = at + 2;
                } else {
                    in_quotes = false;
                    pos = at + 1;
                }
            }
            b',' if !in_quotes => {
                cells.push(cell.trim().to_string());
                cell.clear();
                pos = at + 1;
            }
            other => {
                // A comma inside quotes, or a backslash-preceded quote kept
                // literally.
                cell.push(other as char);
                pos = at + 1;
            }
        }
    }

    cells.push(cell.trim().to_string());
    cells
}
