//! Whole-table evaluation and report assembly.

use crate::core::validator;
use crate::input::TableData;
use crate::models::mode::ColumnLayout;
use crate::models::report::{CheckEntry, CheckReport, Highlight};
use crate::models::row::RowInput;

/// Run the row validator over every data row of `table`.
///
/// Row 0 is the header and is never evaluated; entries carry the 1-based
/// data row index. Rows shorter than the layout are recorded as skipped,
/// never as findings. Every row yields a deterministic outcome and
/// evaluation always continues to the next row.
pub fn check_table(
    table: &TableData,
    layout: &ColumnLayout,
    threshold: u32,
    mode: Option<String>,
) -> CheckReport {
    let mut entries: Vec<CheckEntry> = Vec::new();
    let mut highlights: Vec<Highlight> = Vec::new();
    let mut skipped: Vec<usize> = Vec::new();
    let mut rows_checked = 0usize;

    for (i, cells) in table.rows.iter().enumerate().skip(1) {
        let Some(row) = RowInput::from_cells(cells, layout) else {
            skipped.push(i);
            continue;
        };

        rows_checked += 1;
        let outcome = validator::evaluate_row(i, &row, i64::from(threshold));
        entries.extend(outcome.entries);
        highlights.extend(outcome.highlights);
    }

    CheckReport::new(mode, entries, highlights, rows_checked, skipped)
}
