//! Mode detection: first configured mode whose table id is present wins.

use crate::input::TableData;
use crate::input::html::HtmlDocument;
use crate::models::mode::ModeConfig;

/// Walk the configured modes in order and return the first whose table id
/// resolves to a real `<table>` element, together with the extracted
/// table. When two mode tables coexist in one document, the earlier mode
/// wins; there is no ambiguity resolution beyond list order.
pub fn detect_mode<'a>(
    doc: &HtmlDocument,
    modes: &'a [ModeConfig],
) -> Option<(&'a ModeConfig, TableData)> {
    for mode in modes {
        if let Some(table) = doc.table_by_id(&mode.table_id) {
            return Some((mode, table));
        }
    }
    None
}

/// Comma-separated list of the ids tried during detection, for the
/// table-not-found message.
pub fn searched_ids(modes: &[ModeConfig]) -> String {
    modes
        .iter()
        .map(|m| m.table_id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
