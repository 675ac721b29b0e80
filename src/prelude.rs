//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from
//! csvgrid. Importing this module with a wildcard import brings the core
//! API into scope:
//!
//! ```
//! use csvgrid::prelude::*;
//!
//! let grid = parse("a,b\n1,2");
//! assert_eq!(to_csv(&grid), "a,b\n1,2");
//! ```
//!
//! # Re-exported Items
//!
//! ## Core Types
//! - [`Grid`] - Headers plus rows of string cells
//! - [`Row`] - One row of cell values
//! - [`GridError`] - Mutation error type
//!
//! ## Parsing & Serialization
//! - [`parse()`] - CSV text to [`Grid`]
//! - [`to_csv()`] - [`Grid`] back to CSV text
//! - [`to_json()`] - [`Grid`] to indented JSON text
//!
//! ## Export Metadata
//! - [`ExportFormat`] - CSV/JSON download format (MIME type, file names)
//! - [`csv_file_name()`] - CSV download name from a base name
//! - [`default_base_name()`] - Default base name from the uploaded file

pub use crate::export::{csv_file_name, default_base_name, ExportFormat, JSON_FILE_NAME};
pub use crate::grid::{Grid, GridError, Row};
pub use crate::parser::parse;
pub use crate::serialize::{to_csv, to_json};
