//! WASM bindings for csvgrid
//!
//! This module provides the JavaScript surface for browser hosts. When
//! compiled with the `wasm` feature, it exposes a `CsvGrid` class wrapping
//! one loaded file: construct it from the file's text, read cells for
//! rendering, apply row edits, and pull CSV/JSON strings for downloads.
//!
//! Constructing a new `CsvGrid` replaces the previous one wholesale; the
//! grid holds no state beyond the loaded data.

use js_sys::{Array, JsString, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::export::ExportFormat;
use crate::grid::{Grid, Row};
use crate::parser::parse;
use crate::serialize::{to_csv, to_json};

/// One loaded CSV file, exposed to JavaScript as an editable grid.
///
/// Create with `new CsvGrid(text)` where `text` is the decoded file content.
#[wasm_bindgen]
pub struct CsvGrid {
    grid: Grid,
}

#[wasm_bindgen]
impl CsvGrid {
    /// Parse CSV text into a grid.
    ///
    /// Parsing never throws; empty input yields a grid with no headers and
    /// no rows (check with `isEmpty()`).
    #[wasm_bindgen(constructor)]
    pub fn new(text: &str) -> CsvGrid {
        CsvGrid { grid: parse(text) }
    }

    /// True when the grid has neither headers nor rows.
    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Header names as a JavaScript array of strings.
    pub fn headers(&self) -> Array {
        self.grid
            .headers
            .iter()
            .map(|h| JsString::from(h.as_str()))
            .collect()
    }

    /// Number of data rows.
    #[wasm_bindgen(js_name = rowCount)]
    pub fn row_count(&self) -> usize {
        self.grid.row_count()
    }

    /// Number of columns (headers).
    #[wasm_bindgen(js_name = columnCount)]
    pub fn column_count(&self) -> usize {
        self.grid.column_count()
    }

    /// Cell value at `(row, col)`; missing cells come back as `""`.
    pub fn cell(&self, row: usize, col: usize) -> String {
        self.grid.cell(row, col).to_string()
    }

    /// One row as a JavaScript array of strings, empty when out of range.
    pub fn row(&self, index: usize) -> Array {
        match self.grid.rows.get(index) {
            Some(row) => row.iter().map(|c| JsString::from(c.as_str())).collect(),
            None => Array::new(),
        }
    }

    /// Append a row built from a JS object of header → value.
    ///
    /// Headers missing from the object become `""`; extra keys are ignored.
    #[wasm_bindgen(js_name = appendRow)]
    pub fn append_row(&mut self, fields: &Object) {
        let row = self.row_from_object(fields);
        self.grid.append_row(row);
    }

    /// Replace the row at `index` with one built from a JS object of
    /// header → value.
    ///
    /// # Throws
    /// If `index` is out of range.
    #[wasm_bindgen(js_name = replaceRow)]
    pub fn replace_row(&mut self, index: usize, fields: &Object) -> Result<(), JsValue> {
        let row = self.row_from_object(fields);
        self.grid
            .replace_row(index, row)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Serialize the grid back to CSV text.
    #[wasm_bindgen(js_name = toCsv)]
    pub fn to_csv(&self) -> String {
        to_csv(&self.grid)
    }

    /// Serialize the grid as 2-space-indented JSON.
    ///
    /// # Throws
    /// If JSON serialization fails.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsValue> {
        to_json(&self.grid).map_err(|e| JsValue::from_str(&format!("JSON error: {}", e)))
    }

    /// Map each grid header through a JS field object, missing → `""`.
    fn row_from_object(&self, fields: &Object) -> Row {
        self.grid
            .headers
            .iter()
            .map(|header| {
                Reflect::get(fields, &JsValue::from_str(header))
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default()
            })
            .collect()
    }
}

/// MIME type for a download: `"csv"` → `text/csv`, `"json"` →
/// `application/json`.
///
/// # Throws
/// If `format` names neither.
#[wasm_bindgen(js_name = exportMime)]
pub fn export_mime(format: &str) -> Result<String, JsValue> {
    Ok(parse_format(format)?.mime().to_string())
}

/// Default download file name for a format, given the uploaded file's name
/// (or `null`).
///
/// # Throws
/// If `format` names neither `"csv"` nor `"json"`.
#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name(format: &str, uploaded_file_name: Option<String>) -> Result<String, JsValue> {
    Ok(parse_format(format)?.file_name(uploaded_file_name.as_deref()))
}

/// CSV download name for a user-chosen base name.
#[wasm_bindgen(js_name = csvFileName)]
pub fn csv_file_name(base: &str) -> String {
    crate::export::csv_file_name(base)
}

fn parse_format(format: &str) -> Result<ExportFormat, JsValue> {
    match format {
        "csv" => Ok(ExportFormat::Csv),
        "json" => Ok(ExportFormat::Json),
        other => Err(JsValue::from_str(&format!("unknown export format: {}", other))),
    }
}

/// Initialize function for WASM
#[wasm_bindgen]
pub fn init() {
    // Set up panic hook for better error messages
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
