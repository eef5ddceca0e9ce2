use crate::models::mode::ColumnLayout;
use crate::models::time_value::TimeValue;

/// The six time fields of one data row: two independent objective
/// readings per boundary (badge reader "id", workstation "pc") and the
/// applied times under validation.
#[derive(Debug, Clone, Copy)]
pub struct RowInput {
    pub id_start: TimeValue,
    pub id_end: TimeValue,
    pub pc_start: TimeValue,
    pub pc_end: TimeValue,
    pub ap_start: TimeValue,
    pub ap_end: TimeValue,
}

impl RowInput {
    /// Pick the configured cells out of a raw row.
    /// Returns None when the row is too short for the layout.
    pub fn from_cells(cells: &[String], layout: &ColumnLayout) -> Option<Self> {
        if cells.len() < layout.required_cells() {
            return None;
        }
        Some(Self {
            id_start: TimeValue::parse(&cells[layout.id_start]),
            id_end: TimeValue::parse(&cells[layout.id_end]),
            pc_start: TimeValue::parse(&cells[layout.pc_start]),
            pc_end: TimeValue::parse(&cells[layout.pc_end]),
            ap_start: TimeValue::parse(&cells[layout.ap_start]),
            ap_end: TimeValue::parse(&cells[layout.ap_end]),
        })
    }
}
