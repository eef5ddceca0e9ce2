//! CSV input: every record becomes a raw row. Row 0 is treated as the
//! header, exactly like HTML input.

use crate::errors::AppResult;
use crate::input::TableData;
use csv::ReaderBuilder;
use std::path::Path;

pub fn read_csv(path: &Path) -> AppResult<TableData> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(TableData { rows })
}
