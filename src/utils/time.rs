//! Parsing HH:MM cell text into minutes since midnight.

/// Convert an "HH:MM" string to minutes since midnight.
///
/// Exactly two colon-separated integer fields are accepted; the empty
/// string, a missing colon or non-integer fields yield None. Out-of-range
/// fields are taken at face value ("24:99" is 1539): the tables this tool
/// reads carry no day rollover, so there is nothing to clamp against.
pub fn to_minutes(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let mut parts = s.split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    // Absurd field values that overflow the arithmetic are treated like
    // any other unparsable cell.
    hours.checked_mul(60)?.checked_add(minutes)
}
