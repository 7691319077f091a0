use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use gridline_core::{RawSeries, Row, TimeSeriesTable};

use super::day;

/// 01:00 UTC on 2015-03-29, when Irish wall clocks jump from 01:00 to 02:00.
fn dst_switch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2015, 3, 29, 1, 0, 0).unwrap()
}

fn offset_at(instant: DateTime<Utc>) -> FixedOffset {
    let hours = if instant < dst_switch() { 0 } else { 1 };
    FixedOffset::east_opt(hours * 3600).unwrap()
}

fn load_on(date: NaiveDate) -> f64 {
    match date.day() {
        27 => 400.0,
        29 => 600.0,
        _ => 700.0,
    }
}

/// Every `(start, end, load)` reading, offset-qualified.
///
/// - 2015-03-27: full day at 400.
/// - 2015-03-28: no readings at all.
/// - 2015-03-29: 600; wall times 01:00 and 01:30 never occur (DST).
/// - 2015-03-30: 700; 10:00 through 11:30 missing; the last reading lasts an hour.
#[must_use]
pub fn readings() -> Vec<(DateTime<FixedOffset>, DateTime<FixedOffset>, f64)> {
    let first = Utc.with_ymd_and_hms(2015, 3, 27, 0, 0, 0).unwrap();
    // 23:30 local on the 30th, at +01:00.
    let last = Utc.with_ymd_and_hms(2015, 3, 30, 22, 30, 0).unwrap();
    let step = TimeDelta::minutes(30);

    let mut out = Vec::new();
    let mut u = first;
    while u <= last {
        let start = u.with_timezone(&offset_at(u));
        let local = start.naive_local();
        let date = local.date();
        let skip = date == day(28).date()
            || (date == day(30).date() && matches!(local.hour(), 10 | 11));
        if !skip {
            let len = if u == last { TimeDelta::hours(1) } else { step };
            let end = (u + len).with_timezone(&offset_at(u + len));
            out.push((start, end, load_on(date)));
        }
        u += step;
    }
    out
}

/// Raw CSV with header `start,end,load`.
#[must_use]
pub fn csv() -> String {
    let mut s = String::from("start,end,load\n");
    for (start, end, load) in readings() {
        s.push_str(&format!(
            "{},{},{load}\n",
            start.format("%Y-%m-%d %H:%M:%S%:z"),
            end.format("%Y-%m-%d %H:%M:%S%:z"),
        ));
    }
    s
}

/// The readings as a start-keyed table on `time` plus their bounds.
#[must_use]
pub fn raw() -> RawSeries {
    let readings = readings();
    let rows = readings
        .iter()
        .map(|(start, _, load)| Row::new(start.naive_local(), vec![Some(*load)]))
        .collect();
    let bounds = readings.iter().map(|(s, e, _)| (*s, *e)).collect();
    let table = TimeSeriesTable::from_rows("time", vec!["load".into()], rows).unwrap();
    RawSeries::with_intervals(table, bounds)
}

/// Number of half-hour grid points the raw series is missing.
pub const MISSING_SLOTS: usize = 48 + 2 + 4;

/// Expected daily means after regularization, 2015-03-27 through 2015-03-30.
#[must_use]
pub fn daily() -> TimeSeriesTable {
    let rows = [(27, 400.0), (28, 500.0), (29, 600.0), (30, 700.0)]
        .into_iter()
        .map(|(d, v)| Row::new(day(d), vec![Some(v)]))
        .collect();
    TimeSeriesTable::from_rows("time", vec!["load".into()], rows).unwrap()
}

/// `daily()` as written with no decimals.
pub const DAILY_CSV: &str = "time,load\n2015-03-27,400\n2015-03-28,500\n2015-03-29,600\n2015-03-30,700\n";
