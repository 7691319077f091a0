//! Deterministic fixtures for gridline tests.
//!
//! Two raw sources cover the awkward cases a real feed throws up:
//!
//! - [`electricity`]: half-hourly `(start, end, load)` readings across the
//!   Irish spring DST change, with a missing day, a mid-day gap and one
//!   interval of uneven length.
//! - [`weather`]: hourly readings from two stations, blank rain values, and
//!   a missing day.
//!
//! Each module also carries the expected daily table and its CSV rendering,
//! and [`MERGED_CSV`] is the expected join of the two.

mod fixtures;

pub use fixtures::{day, electricity, weather};

/// Expected merge of the two daily tables with calendar columns, one decimal.
///
/// 2015-03-28 is a Saturday.
pub const MERGED_CSV: &str = "\
time,load,rain,temp,year,month,day,day_of_week,day_type
2015-03-28,500.0,0.2,11.0,2015,3,28,5,weekend
2015-03-29,600.0,0.4,12.0,2015,3,29,6,weekend
2015-03-30,700.0,0.6,13.0,2015,3,30,0,weekday
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn electricity_fixture_shape() {
        let r = electricity::readings();
        assert_eq!(r.len(), 48 + 46 + 44);
        assert!(electricity::csv().starts_with("start,end,load\n2015-03-27 00:00:00+00:00,"));
        assert_eq!(electricity::raw().table.len(), r.len());
    }

    #[test]
    fn weather_fixture_shape() {
        let csv = weather::csv();
        assert!(csv.contains("Dublin,Phoenix Park,28-mar-2015 00:00, ,12.0\n"));
        assert_eq!(csv.lines().count(), 1 + 3 * 24 * 2);
    }
}
