use crate::errors::{AppError, AppResult};
use crate::models::report::CheckReport;
use std::path::Path;

/// Write the whole report as pretty-printed JSON.
pub fn write_json(path: &Path, report: &CheckReport) -> AppResult<()> {
    let json =
        serde_json::to_string_pretty(report).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    Ok(())
}
