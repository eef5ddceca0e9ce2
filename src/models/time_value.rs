use crate::utils::time;

/// A time of day in minutes since 00:00, or the explicit invalid value.
///
/// Unparsable cell text never collapses to zero minutes: an empty or
/// malformed cell is "no reading", which downstream logic treats very
/// differently from midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeValue(Option<i64>);

impl TimeValue {
    pub const INVALID: TimeValue = TimeValue(None);

    pub fn from_minutes(mins: i64) -> Self {
        TimeValue(Some(mins))
    }

    /// Parse cell text in "HH:MM" form. Anything else is the invalid value.
    pub fn parse(s: &str) -> Self {
        TimeValue(time::to_minutes(s))
    }

    pub fn minutes(self) -> Option<i64> {
        self.0
    }

    pub fn is_valid(self) -> bool {
        self.0.is_some()
    }
}
