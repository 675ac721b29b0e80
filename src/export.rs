//! Download metadata for exported grids
//!
//! The core only produces string content; the host (browser shell) owns the
//! Blob/anchor mechanics of an actual download. What lives here is the
//! policy half of that hand-off: the MIME type per format and the file-name
//! rules — CSV downloads default to the uploaded file's base name with its
//! extension stripped (falling back to `download`), JSON downloads always go
//! to `converted_data.json`.

/// File name used for every JSON export.
pub const JSON_FILE_NAME: &str = "converted_data.json";

/// Base name used for CSV exports when no usable uploaded name exists.
pub const DEFAULT_BASE_NAME: &str = "download";

/// The two export formats a grid can be written as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV text, `text/csv`.
    Csv,
    /// 2-space-indented JSON, `application/json`.
    Json,
}

impl ExportFormat {
    /// MIME type for the download.
    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    /// Default download file name, given the name of the originally uploaded
    /// file (if any).
    ///
    /// CSV exports prompt the user with this default; the chosen base name
    /// then goes through [`csv_file_name`]. JSON exports are fixed.
    pub fn file_name(self, uploaded_file_name: Option<&str>) -> String {
        match self {
            ExportFormat::Csv => csv_file_name(&default_base_name(uploaded_file_name)),
            ExportFormat::Json => JSON_FILE_NAME.to_string(),
        }
    }
}

/// Turn a user-chosen or default base name into the CSV download name.
pub fn csv_file_name(base: &str) -> String {
    format!("{}.csv", base)
}

/// Base name for a CSV download: the uploaded file name with its final
/// extension stripped, or [`DEFAULT_BASE_NAME`] when that leaves nothing.
pub fn default_base_name(uploaded_file_name: Option<&str>) -> String {
    let stripped = uploaded_file_name.map(strip_extension).unwrap_or("");
    if stripped.is_empty() {
        DEFAULT_BASE_NAME.to_string()
    } else {
        stripped.to_string()
    }
}

/// Strip a trailing `.ext` where `ext` is non-empty and contains no `/` or
/// further `.` — e.g. `data.csv` → `data`, `archive.tar.gz` → `archive.tar`,
/// `notes` → `notes`. A name that is nothing but an extension (`.csvrc`)
/// strips to the empty string, which callers treat as "no usable name".
fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => {
            let ext = &name[dot + 1..];
            if !ext.is_empty() && !ext.contains('/') {
                &name[..dot]
            } else {
                name
            }
        }
        None => name,
    }
}
