//! Per-row evaluation: applied-time presence, window resolution and the
//! tolerance checks. Pure: no I/O, no styling, just data in and findings
//! out.

use crate::core::window;
use crate::models::boundary::Boundary;
use crate::models::report::{CheckEntry, EntryReason, Highlight};
use crate::models::row::RowInput;

/// Everything one row produced. Empty entries means the row passed.
#[derive(Debug, Default)]
pub struct RowOutcome {
    pub entries: Vec<CheckEntry>,
    pub highlights: Vec<Highlight>,
}

impl RowOutcome {
    fn flag(&mut self, row: usize, boundary: Boundary, reason: EntryReason) {
        self.entries.push(CheckEntry {
            row,
            boundary,
            reason,
        });
        self.highlights.push(Highlight { row, boundary });
    }

    pub fn passed(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Evaluate one data row against the threshold (minutes).
///
/// A row with an unparsable applied time is terminal: it emits one
/// missing-applied entry per invalid applied field and never reaches the
/// window checks, even when the other fields would also violate.
pub fn evaluate_row(row_index: usize, row: &RowInput, threshold: i64) -> RowOutcome {
    let mut outcome = RowOutcome::default();

    let (Some(ap_start), Some(ap_end)) = (row.ap_start.minutes(), row.ap_end.minutes()) else {
        if !row.ap_start.is_valid() {
            outcome.flag(row_index, Boundary::Start, EntryReason::MissingApplied);
        }
        if !row.ap_end.is_valid() {
            outcome.flag(row_index, Boundary::End, EntryReason::MissingApplied);
        }
        return outcome;
    };

    // Start: applied must fall inside [S, S + threshold].
    if let Some(start) = window::resolve(Boundary::Start, row.id_start, row.pc_start) {
        if ap_start < start || ap_start > start + threshold {
            outcome.flag(row_index, Boundary::Start, EntryReason::OutOfWindow);
        }
    }

    // End: applied must fall inside [E - threshold, E].
    if let Some(end) = window::resolve(Boundary::End, row.id_end, row.pc_end) {
        if ap_end < end - threshold || ap_end > end {
            outcome.flag(row_index, Boundary::End, EntryReason::OutOfWindow);
        }
    }

    outcome
}
