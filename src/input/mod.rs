pub mod csv;
pub mod html;

use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use std::path::Path;

/// A parsed table: raw cell text per row. Row 0 is the header.
#[derive(Debug, Clone, Default)]
pub struct TableData {
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn data_row_count(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }
}

/// Supported input file formats.
#[derive(Clone, Debug, ValueEnum)]
pub enum InputFormat {
    Html,
    Csv,
}

impl InputFormat {
    /// Infer the format from the file extension.
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "html" | "htm" => Ok(InputFormat::Html),
            "csv" => Ok(InputFormat::Csv),
            _ => Err(AppError::InputFormat(path.display().to_string())),
        }
    }
}
