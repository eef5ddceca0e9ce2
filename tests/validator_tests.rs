//! Library-level coverage of the parsing and validation core.

use tablecheck::core::report::check_table;
use tablecheck::core::validator::evaluate_row;
use tablecheck::core::window;
use tablecheck::input::TableData;
use tablecheck::models::boundary::Boundary;
use tablecheck::models::mode::ColumnLayout;
use tablecheck::models::report::EntryReason;
use tablecheck::models::row::RowInput;
use tablecheck::models::time_value::TimeValue;
use tablecheck::utils::time::to_minutes;

fn layout() -> ColumnLayout {
    ColumnLayout {
        id_start: 0,
        id_end: 1,
        pc_start: 2,
        pc_end: 3,
        ap_start: 4,
        ap_end: 5,
    }
}

fn row(cells: [&str; 6]) -> RowInput {
    RowInput {
        id_start: TimeValue::parse(cells[0]),
        id_end: TimeValue::parse(cells[1]),
        pc_start: TimeValue::parse(cells[2]),
        pc_end: TimeValue::parse(cells[3]),
        ap_start: TimeValue::parse(cells[4]),
        ap_end: TimeValue::parse(cells[5]),
    }
}

#[test]
fn test_parse_valid_hhmm() {
    assert_eq!(to_minutes("00:00"), Some(0));
    assert_eq!(to_minutes("09:05"), Some(545));
    assert_eq!(to_minutes("23:59"), Some(1439));
    // Surrounding whitespace is cell noise, not a format violation.
    assert_eq!(to_minutes(" 10:30 "), Some(630));
}

#[test]
fn test_parse_accepts_out_of_range_arithmetically() {
    assert_eq!(to_minutes("24:99"), Some(24 * 60 + 99));
    assert_eq!(to_minutes("12:60"), Some(780));
}

#[test]
fn test_parse_rejects_fields_that_overflow() {
    // Fields large enough to overflow the minute arithmetic are invalid,
    // not a panic.
    assert_eq!(to_minutes("9223372036854775807:00"), None);
    assert_eq!(to_minutes("1:9223372036854775807"), None);
    assert_eq!(to_minutes("-9223372036854775808:00"), None);
}

#[test]
fn test_parse_rejects_malformed_input() {
    assert_eq!(to_minutes(""), None);
    assert_eq!(to_minutes("   "), None);
    assert_eq!(to_minutes("12"), None);
    assert_eq!(to_minutes("12:60:00"), None);
    assert_eq!(to_minutes("ab:cd"), None);
    assert_eq!(to_minutes("12:"), None);
    assert_eq!(to_minutes(":30"), None);
}

#[test]
fn test_invalid_never_collapses_to_zero() {
    assert_ne!(TimeValue::parse(""), TimeValue::from_minutes(0));
    assert!(!TimeValue::parse("").is_valid());
    assert_eq!(TimeValue::parse(""), TimeValue::INVALID);
}

#[test]
fn test_window_resolution_min_start_max_end() {
    let a = TimeValue::from_minutes(10);
    let b = TimeValue::from_minutes(20);
    assert_eq!(window::resolve(Boundary::Start, a, b), Some(10));
    assert_eq!(window::resolve(Boundary::End, a, b), Some(20));
    // Symmetric in the readings.
    assert_eq!(window::resolve(Boundary::Start, b, a), Some(10));
    assert_eq!(window::resolve(Boundary::End, b, a), Some(20));
}

#[test]
fn test_window_resolution_single_reading() {
    let v = TimeValue::from_minutes(540);
    assert_eq!(window::resolve(Boundary::Start, v, TimeValue::INVALID), Some(540));
    assert_eq!(window::resolve(Boundary::Start, TimeValue::INVALID, v), Some(540));
}

#[test]
fn test_window_resolution_undefined() {
    assert_eq!(
        window::resolve(Boundary::End, TimeValue::INVALID, TimeValue::INVALID),
        None
    );
}

#[test]
fn test_threshold_edges() {
    // S = 600 (10:00), T = 30.
    let pass = evaluate_row(1, &row(["10:00", "17:00", "", "", "10:30", "17:00"]), 30);
    assert!(pass.passed());

    let late = evaluate_row(1, &row(["10:00", "17:00", "", "", "10:31", "17:00"]), 30);
    assert_eq!(late.entries.len(), 1);
    assert_eq!(late.entries[0].boundary, Boundary::Start);
    assert_eq!(late.entries[0].reason, EntryReason::OutOfWindow);

    let early = evaluate_row(1, &row(["10:00", "17:00", "", "", "09:59", "17:00"]), 30);
    assert_eq!(early.entries.len(), 1);
    assert_eq!(early.entries[0].boundary, Boundary::Start);
}

#[test]
fn test_end_boundary_window_is_below_resolved_end() {
    // E = 1020 (17:00), T = 30: applied end must sit in [16:30, 17:00].
    let pass = evaluate_row(1, &row(["09:00", "17:00", "", "", "09:10", "16:30"]), 30);
    assert!(pass.passed());

    let over = evaluate_row(1, &row(["09:00", "17:00", "", "", "09:10", "17:01"]), 30);
    assert_eq!(over.entries.len(), 1);
    assert_eq!(over.entries[0].boundary, Boundary::End);

    let under = evaluate_row(1, &row(["09:00", "17:00", "", "", "09:10", "16:29"]), 30);
    assert_eq!(under.entries.len(), 1);
    assert_eq!(under.entries[0].boundary, Boundary::End);
}

#[test]
fn test_worked_example_row_passes() {
    // id 09:00-10:00, pc empty, applied 09:15/10:00, T = 30:
    // S = 540, E = 600, 555 in [540, 570], 600 in [570, 600].
    let outcome = evaluate_row(1, &row(["09:00", "10:00", "", "", "09:15", "10:00"]), 30);
    assert!(outcome.passed());
    assert!(outcome.highlights.is_empty());
}

#[test]
fn test_envelope_uses_widest_window() {
    // id 09:10 / pc 09:00 resolve to S = 09:00; applied 09:20 is within
    // 30 min of the earlier reading.
    let outcome = evaluate_row(1, &row(["09:10", "17:00", "09:00", "16:50", "09:20", "16:55"]), 30);
    assert!(outcome.passed());
}

#[test]
fn test_missing_applied_is_terminal() {
    // ap_start unparsable; ap_end would fail the end check, but the row
    // never reaches it.
    let outcome = evaluate_row(3, &row(["09:00", "17:00", "", "", "", "18:30"]), 30);
    assert_eq!(outcome.entries.len(), 1);
    assert_eq!(outcome.entries[0].row, 3);
    assert_eq!(outcome.entries[0].boundary, Boundary::Start);
    assert_eq!(outcome.entries[0].reason, EntryReason::MissingApplied);
}

#[test]
fn test_missing_both_applied_emits_two_entries() {
    let outcome = evaluate_row(2, &row(["09:00", "17:00", "", "", "", "bad"]), 30);
    assert_eq!(outcome.entries.len(), 2);
    assert_eq!(outcome.entries[0].boundary, Boundary::Start);
    assert_eq!(outcome.entries[1].boundary, Boundary::End);
    assert!(outcome
        .entries
        .iter()
        .all(|e| e.reason == EntryReason::MissingApplied));
}

#[test]
fn test_undefined_boundary_is_silently_skipped() {
    // No objective start readings at all: only the end is checked.
    let outcome = evaluate_row(1, &row(["", "17:00", "", "", "05:00", "16:50"]), 30);
    assert!(outcome.passed());
}

#[test]
fn test_check_table_empty_is_success() {
    let table = TableData {
        rows: vec![vec!["h".into(); 6]],
    };
    let report = check_table(&table, &layout(), 30, None);
    assert!(report.success);
    assert!(report.entries.is_empty());
    assert_eq!(report.rows_checked, 0);
}

#[test]
fn test_check_table_rows_are_one_based() {
    let table = TableData {
        rows: vec![
            vec!["h".into(); 6],
            to_cells(["09:00", "17:00", "", "", "09:10", "16:50"]),
            to_cells(["09:00", "17:00", "", "", "11:00", "16:50"]),
        ],
    };
    let report = check_table(&table, &layout(), 30, Some("test".into()));
    assert!(!report.success);
    assert_eq!(report.entries.len(), 1);
    assert_eq!(report.entries[0].row, 2);
    assert_eq!(report.rows_checked, 2);
}

#[test]
fn test_check_table_skips_short_rows() {
    let table = TableData {
        rows: vec![
            vec!["h".into(); 6],
            vec!["09:00".into(), "17:00".into()],
            to_cells(["09:00", "17:00", "", "", "09:10", "16:50"]),
        ],
    };
    let report = check_table(&table, &layout(), 30, None);
    assert_eq!(report.skipped, vec![1]);
    assert_eq!(report.rows_checked, 1);
    assert!(report.success);
}

#[test]
fn test_highlights_mirror_entries() {
    let table = TableData {
        rows: vec![
            vec!["h".into(); 6],
            to_cells(["09:00", "17:00", "", "", "08:00", "18:00"]),
        ],
    };
    let report = check_table(&table, &layout(), 30, None);
    assert_eq!(report.highlights.len(), 2);
    let boundaries = report.highlighted_boundaries(1);
    assert!(boundaries.contains(&Boundary::Start));
    assert!(boundaries.contains(&Boundary::End));
    assert!(report.highlighted_boundaries(2).is_empty());
}

fn to_cells(cells: [&str; 6]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}
