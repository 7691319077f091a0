use std::collections::BTreeSet;

use chrono::{NaiveDateTime, TimeDelta};
use gridline_types::Frequency;

/// Grid points in `[min, max]` that no timestamp occupies.
///
/// The grid starts at the earliest timestamp and advances by
/// `interval.step()` while it does not pass the latest one. Input order and
/// duplicates do not matter. Returns an empty vector for fewer than two
/// distinct timestamps, or when `interval` has a zero step.
///
/// Timestamps that sit off the grid (for example a stray 10:17 reading in a
/// half-hourly series) are not reported; they are not missing grid points.
///
/// ```
/// use chrono::NaiveDate;
/// use gridline_core::detect_gaps;
/// use gridline_types::Frequency;
///
/// let day = |d| NaiveDate::from_ymd_opt(2015, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let gaps = detect_gaps([day(1), day(2), day(5)], Frequency::DAILY);
/// assert_eq!(gaps, vec![day(3), day(4)]);
/// ```
#[must_use]
pub fn detect_gaps<I>(timestamps: I, interval: Frequency) -> Vec<NaiveDateTime>
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    let present: BTreeSet<NaiveDateTime> = timestamps.into_iter().collect();
    let (Some(&first), Some(&last)) = (present.first(), present.last()) else {
        return Vec::new();
    };

    let step = interval.step();
    if step <= TimeDelta::zero() {
        return Vec::new();
    }
    let mut missing = Vec::new();
    let mut cur = first;
    while cur <= last {
        if !present.contains(&cur) {
            missing.push(cur);
        }
        match cur.checked_add_signed(step) {
            Some(next) => cur = next,
            None => break,
        }
    }
    missing
}
