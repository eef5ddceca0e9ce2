//! Reference window resolution from the two objective readings.

use crate::models::boundary::Boundary;
use crate::models::time_value::TimeValue;

/// Resolve one boundary of the reference window from the badge ("id") and
/// workstation ("pc") readings.
///
/// One valid reading: use it. Both valid: take the widest envelope, i.e.
/// the minimum for the start boundary and the maximum for the end
/// boundary. Neither valid: the boundary is undefined and its check is
/// skipped, which is not an error.
pub fn resolve(boundary: Boundary, id: TimeValue, pc: TimeValue) -> Option<i64> {
    match (id.minutes(), pc.minutes()) {
        (Some(a), Some(b)) => Some(match boundary {
            Boundary::Start => a.min(b),
            Boundary::End => a.max(b),
        }),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
