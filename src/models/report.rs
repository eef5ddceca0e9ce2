use crate::models::boundary::Boundary;
use chrono::Local;
use serde::Serialize;

/// Why a row was flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryReason {
    /// The applied time failed to parse.
    MissingApplied,
    /// The applied time fell outside the resolved window ± threshold.
    OutOfWindow,
}

impl EntryReason {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryReason::MissingApplied => "missing_applied",
            EntryReason::OutOfWindow => "out_of_window",
        }
    }
}

/// One per-row, per-boundary finding.
#[derive(Debug, Clone, Serialize)]
pub struct CheckEntry {
    /// 1-based data row index (the header is row 0 and never evaluated).
    pub row: usize,
    pub boundary: Boundary,
    pub reason: EntryReason,
}

impl CheckEntry {
    pub fn message(&self) -> String {
        format!("Row {} : {} time error", self.row, self.boundary.label())
    }
}

/// Instruction for the rendering layer: paint this row, and the applied
/// cell of this boundary, as offending. The core itself never touches
/// presentation state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Highlight {
    pub row: usize,
    pub boundary: Boundary,
}

/// Outcome of one whole-table check run.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub mode: Option<String>,
    pub entries: Vec<CheckEntry>,
    pub highlights: Vec<Highlight>,
    /// Data rows that were actually evaluated.
    pub rows_checked: usize,
    /// Data rows skipped because they had fewer cells than the layout needs.
    pub skipped: Vec<usize>,
    pub success: bool,
    pub generated_at: String,
}

impl CheckReport {
    pub fn new(
        mode: Option<String>,
        entries: Vec<CheckEntry>,
        highlights: Vec<Highlight>,
        rows_checked: usize,
        skipped: Vec<usize>,
    ) -> Self {
        Self {
            success: entries.is_empty(),
            mode,
            entries,
            highlights,
            rows_checked,
            skipped,
            generated_at: Local::now().to_rfc3339(),
        }
    }

    /// Boundaries highlighted for the given 1-based data row.
    pub fn highlighted_boundaries(&self, row: usize) -> Vec<Boundary> {
        self.highlights
            .iter()
            .filter(|h| h.row == row)
            .map(|h| h.boundary)
            .collect()
    }
}
