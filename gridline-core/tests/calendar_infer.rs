use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta};
use gridline_core::{
    CalendarFields, DayType, Row, TimeSeriesTable, derive_calendar_fields, distinct_intervals,
    estimate_step, is_regular,
};

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 3, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[test]
fn week_cycles_through_weekdays_then_weekend() {
    // 2021-03-01 is a Monday.
    let types: Vec<(u32, DayType)> = (1..=7)
        .map(|d| {
            let c = CalendarFields::of(day(d));
            (c.day_of_week, c.day_type)
        })
        .collect();
    assert_eq!(
        types,
        vec![
            (0, DayType::Weekday),
            (1, DayType::Weekday),
            (2, DayType::Weekday),
            (3, DayType::Weekday),
            (4, DayType::Weekday),
            (5, DayType::Weekend),
            (6, DayType::Weekend),
        ]
    );
}

#[test]
fn calendar_is_aligned_with_rows_and_leaves_values_alone() {
    let rows = vec![
        Row::new(day(5), vec![Some(1.0)]),
        Row::new(day(6), vec![None]),
    ];
    let table = TimeSeriesTable::from_rows("time", vec!["load".into()], rows).unwrap();
    let merged = derive_calendar_fields(table.clone());
    assert_eq!(merged.len(), 2);
    assert_eq!(merged.table(), &table);
    let cal = merged.calendar().unwrap();
    assert_eq!(cal[0].day_type, DayType::Weekday);
    assert_eq!(cal[1].day_type, DayType::Weekend);
    assert_eq!((cal[1].year, cal[1].month, cal[1].day), (2021, 3, 6));
}

#[test]
fn estimate_step_on_half_hourly_with_a_gap() {
    let at = |m: i64| day(1) + TimeDelta::minutes(m);
    let ts = [0, 30, 60, 90, 180, 210].map(at);
    assert_eq!(estimate_step(ts), Some(TimeDelta::minutes(30)));
    assert_eq!(estimate_step([day(1)]), None);
    assert_eq!(estimate_step([day(1), day(1)]), None);
}

#[test]
fn estimate_step_falls_back_to_lower_median() {
    let at = |m: i64| day(1) + TimeDelta::minutes(m);
    // Deltas 10, 20, 30: no unique mode.
    assert_eq!(
        estimate_step([0, 10, 30, 60].map(at)),
        Some(TimeDelta::minutes(20))
    );
}

#[test]
fn distinct_intervals_see_dst_changes() {
    let p = |a: &str, b: &str| {
        (
            DateTime::parse_from_rfc3339(a).unwrap(),
            DateTime::parse_from_rfc3339(b).unwrap(),
        )
    };
    let pairs = [
        p("2015-03-29T00:00:00+01:00", "2015-03-29T00:30:00+01:00"),
        p("2015-03-29T01:30:00+01:00", "2015-03-29T03:00:00+02:00"),
        p("2015-03-29T03:00:00+02:00", "2015-03-29T03:30:00+02:00"),
    ];
    assert_eq!(distinct_intervals(pairs), vec![TimeDelta::minutes(30)]);

    let uneven = [
        p("2015-01-01T00:00:00Z", "2015-01-01T00:30:00Z"),
        p("2015-01-01T00:30:00Z", "2015-01-01T01:30:00Z"),
    ];
    assert_eq!(
        distinct_intervals(uneven),
        vec![TimeDelta::minutes(30), TimeDelta::hours(1)]
    );
}

#[test]
fn regularity_check() {
    assert!(is_regular(Vec::new(), TimeDelta::days(1)));
    assert!(is_regular([day(1), day(2), day(3)], TimeDelta::days(1)));
    assert!(!is_regular([day(1), day(3)], TimeDelta::days(1)));
    assert!(!is_regular([day(1), day(1)], TimeDelta::zero()));
}

#[test]
fn tied_modes_pick_the_lower_median_delta() {
    let at = |m: i64| day(1) + TimeDelta::minutes(m);
    // Deltas 10, 10, 20, 20: two modes, lower median 10.
    assert_eq!(
        estimate_step([0, 10, 20, 40, 60].map(at)),
        Some(TimeDelta::minutes(10))
    );
    // Deltas 10, 20, 30, 40: lower median 20.
    assert_eq!(
        estimate_step([0, 10, 30, 60, 100].map(at)),
        Some(TimeDelta::minutes(20))
    );
    // Unsorted input with duplicates.
    assert_eq!(
        estimate_step([60, 0, 30, 30, 90].map(at)),
        Some(TimeDelta::minutes(30))
    );
}
