//! csvgrid - Client-Side CSV Grid Engine
//!
//! This crate is the pure core of a browser CSV editor: load a CSV file,
//! view and edit it as a grid, export the result as CSV or JSON. Everything
//! here is a side-effect-free transform over an explicit [`Grid`] value;
//! file pickers, table rendering, and download plumbing belong to the host.
//!
//! It provides:
//! - A hand-written, quote-aware CSV tokenizer ([`parse`])
//! - An in-memory grid model with row append/replace mutations ([`Grid`])
//! - CSV and indented-JSON serialization ([`to_csv`], [`to_json`])
//! - Download metadata (MIME types, file-name policy) ([`ExportFormat`])
//! - Optional WASM bindings for browser hosts
//!
//! ## Quick Start
//!
//! ```rust
//! use csvgrid::{parse, to_csv, to_json};
//!
//! let grid = parse("name,age\n\"Doe, Jane\",30");
//! assert_eq!(grid.headers, ["name", "age"]);
//! assert_eq!(grid.rows[0][0], "Doe, Jane");
//!
//! // Round-trips back to the same CSV text.
//! assert_eq!(to_csv(&grid), "name,age\n\"Doe, Jane\",30");
//!
//! // And converts to an array of header-keyed objects.
//! let json = to_json(&grid).unwrap();
//! assert!(json.starts_with("[\n  {\n    \"name\": \"Doe, Jane\""));
//! ```
//!
//! ## Editing
//!
//! ```rust
//! use std::collections::HashMap;
//! use csvgrid::parse;
//!
//! let mut grid = parse("name,age\nAlice,30");
//!
//! let mut fields = HashMap::new();
//! fields.insert("name".to_string(), "Bob".to_string());
//! let row = grid.row_from_fields(&fields); // missing "age" becomes ""
//! grid.append_row(row);
//!
//! assert_eq!(grid.rows[1], ["Bob", ""]);
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm` - Enable WebAssembly bindings for browser hosts
//! - `logging` - Enable debug logging using the `log` crate

// Lint configuration for production quality
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![allow(clippy::new_without_default)]

// Prelude module for convenient imports
pub mod prelude;

pub mod export;
pub mod grid;
pub mod parser;
pub mod serialize;

/// Re-export commonly used items for convenience
pub use export::{csv_file_name, default_base_name, ExportFormat, JSON_FILE_NAME};
pub use grid::{Grid, GridError, Row};
pub use parser::parse;
pub use serialize::{to_csv, to_json};

// Conditional compilation for WASM bindings
#[cfg(feature = "wasm")]
mod wasm;
