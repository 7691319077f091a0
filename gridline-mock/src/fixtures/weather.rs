use gridline_core::{Row, TimeSeriesTable};

use super::day;

const STATIONS: [(&str, &str, f64); 2] = [
    ("Dublin", "Dublin Airport", 10.0),
    ("Dublin", "Phoenix Park", 12.0),
];

/// Days (of March 2015) with readings. The 30th is missing entirely.
const DAYS: [u32; 3] = [28, 29, 31];

fn rain_on(d: u32) -> f64 {
    f64::from(d - 27) * 0.2
}

/// Raw hourly CSV with header `county,station,date,rain,temp`.
///
/// Two stations report every hour. Dublin Airport reports rain; Phoenix
/// Park leaves rain blank. Temperatures differ by two degrees between
/// stations, so the hourly mean is `11 + (day - 28)`.
#[must_use]
pub fn csv() -> String {
    let mut s = String::from("county,station,date,rain,temp\n");
    for d in DAYS {
        for hour in 0..24 {
            let ts = day(d).date().and_hms_opt(hour, 0, 0).unwrap();
            let date = ts.format("%d-%b-%Y %H:%M").to_string().to_lowercase();
            for (i, (county, station, base)) in STATIONS.iter().enumerate() {
                let temp = base + f64::from(d - 28);
                let rain = if i == 0 {
                    format!("{:.1}", rain_on(d))
                } else {
                    " ".to_string()
                };
                s.push_str(&format!("{county},{station},{date},{rain},{temp:.1}\n"));
            }
        }
    }
    s
}

/// Number of hourly grid points the raw series is missing.
pub const MISSING_SLOTS: usize = 24;

/// Expected daily means after hourly then daily aggregation and interpolation,
/// 2015-03-28 through 2015-03-31.
#[must_use]
pub fn daily() -> TimeSeriesTable {
    let rows = (28..=31)
        .map(|d| Row::new(day(d), vec![Some(rain_on(d)), Some(11.0 + f64::from(d - 28))]))
        .collect();
    TimeSeriesTable::from_rows("time", vec!["rain".into(), "temp".into()], rows).unwrap()
}

/// `daily()` as written with one decimal.
pub const DAILY_CSV: &str =
    "time,rain,temp\n2015-03-28,0.2,11.0\n2015-03-29,0.4,12.0\n2015-03-30,0.6,13.0\n2015-03-31,0.8,14.0\n";
