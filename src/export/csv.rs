use crate::errors::AppResult;
use crate::models::report::CheckReport;
use csv::Writer;
use std::path::Path;

/// Write the report entries as CSV, one record per finding.
pub fn write_csv(path: &Path, report: &CheckReport) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["row", "boundary", "reason", "message"])?;

    for entry in &report.entries {
        wtr.write_record(&[
            entry.row.to_string(),
            entry.boundary.label().to_string(),
            entry.reason.as_str().to_string(),
            entry.message(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
