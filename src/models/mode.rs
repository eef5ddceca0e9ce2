use crate::models::boundary::Boundary;
use serde::{Deserialize, Serialize};

/// Column layout of a supported table: which 0-based cell index carries
/// which time field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    pub id_start: usize,
    pub id_end: usize,
    pub pc_start: usize,
    pub pc_end: usize,
    pub ap_start: usize,
    pub ap_end: usize,
}

impl ColumnLayout {
    /// Minimum number of cells a row must have to be evaluated.
    pub fn required_cells(&self) -> usize {
        let max = [
            self.id_start,
            self.id_end,
            self.pc_start,
            self.pc_end,
            self.ap_start,
            self.ap_end,
        ]
        .into_iter()
        .max()
        .unwrap_or(0);
        max + 1
    }

    /// Applied-time column for the given boundary.
    pub fn applied_column(&self, boundary: Boundary) -> usize {
        match boundary {
            Boundary::Start => self.ap_start,
            Boundary::End => self.ap_end,
        }
    }
}

/// One supported table mode.
///
/// Modes live in an ordered list: detection walks them front to back and
/// the first whose table id is present wins, so the order in the config
/// file is a contract, not a cosmetic detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeConfig {
    pub name: String,
    pub label: String,
    pub table_id: String,
    pub columns: ColumnLayout,
}
