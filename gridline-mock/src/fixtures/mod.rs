pub mod electricity;
pub mod weather;

use chrono::{NaiveDate, NaiveDateTime};

/// Midnight on the given day of March 2015.
#[must_use]
pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 3, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}
