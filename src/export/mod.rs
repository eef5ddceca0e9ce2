// src/export/mod.rs

mod csv;
mod json;

use crate::errors::AppResult;
use crate::models::report::CheckReport;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the report to `path` in the requested format.
pub fn write_report(report: &CheckReport, format: &ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => csv::write_csv(path, report)?,
        ExportFormat::Json => json::write_json(path, report)?,
    }
    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
