use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use gridline_core::timeseries::interpolate::interpolate_series;
use gridline_core::{GridError, Row, TimeSeriesTable};
use proptest::prelude::*;

fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 1, d)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn daily_table(values: &[Option<f64>]) -> TimeSeriesTable {
    let rows = values
        .iter()
        .zip(1..)
        .map(|(v, d)| Row::new(day(d), vec![*v]))
        .collect();
    TimeSeriesTable::from_rows("time", vec!["load".into()], rows).unwrap()
}

#[test]
fn fills_interior_and_keeps_boundaries_null() {
    let t = daily_table(&[None, None, Some(2.0), None, Some(4.0), None, None]);
    let out = t.interpolate_by_time(&["load"]).unwrap();
    assert_eq!(
        out.column("load").unwrap(),
        vec![None, None, Some(2.0), Some(3.0), Some(4.0), None, None]
    );
}

#[test]
fn weights_by_elapsed_time_not_position() {
    let at = |h: u32| day(1).date().and_hms_opt(h, 0, 0).unwrap();
    let rows = vec![
        Row::new(at(0), vec![Some(10.0)]),
        Row::new(at(1), vec![None]),
        Row::new(at(2), vec![None]),
        Row::new(at(10), vec![Some(20.0)]),
    ];
    let t = TimeSeriesTable::from_rows("time", vec!["temp".into()], rows).unwrap();
    let out = t.interpolate_all();
    let col = out.column("temp").unwrap();
    assert!((col[1].unwrap() - 11.0).abs() < 1e-12);
    assert!((col[2].unwrap() - 12.0).abs() < 1e-12);
}

#[test]
fn unsorted_input_is_sorted_first() {
    let rows = vec![
        Row::new(day(3), vec![Some(30.0)]),
        Row::new(day(1), vec![Some(10.0)]),
        Row::new(day(2), vec![None]),
    ];
    let t = TimeSeriesTable::from_rows("time", vec!["load".into()], rows).unwrap();
    let out = t.interpolate_all();
    assert!(out.is_strictly_increasing());
    assert_eq!(out.column("load").unwrap()[1], Some(20.0));
}

#[test]
fn only_listed_fields_are_touched() {
    let rows = vec![
        Row::new(day(1), vec![Some(0.0), Some(0.0)]),
        Row::new(day(2), vec![None, None]),
        Row::new(day(3), vec![Some(2.0), Some(2.0)]),
    ];
    let t = TimeSeriesTable::from_rows("time", vec!["rain".into(), "temp".into()], rows).unwrap();
    let out = t.interpolate_by_time(&["temp"]).unwrap();
    assert_eq!(out.column("rain").unwrap()[1], None);
    assert_eq!(out.column("temp").unwrap()[1], Some(1.0));
    assert!(matches!(
        t.interpolate_by_time(&["wind"]),
        Err(GridError::UnknownField(_))
    ));
}

#[test]
fn all_null_and_single_value_series_are_unchanged() {
    let times: Vec<NaiveDateTime> = (1..=4).map(day).collect();
    let mut empty = vec![None; 4];
    assert_eq!(interpolate_series(&times, &mut empty), 0);
    assert!(empty.iter().all(Option::is_none));

    let mut single = vec![None, Some(5.0), None, None];
    assert_eq!(interpolate_series(&times, &mut single), 0);
    assert_eq!(single, vec![None, Some(5.0), None, None]);
}

proptest! {
    #[test]
    fn interpolation_invariants(
        values in proptest::collection::vec(prop::option::of(-1000i32..1000), 0..80),
        gaps in proptest::collection::vec(1i64..48, 80),
    ) {
        let mut times = Vec::with_capacity(values.len());
        let mut t = day(1);
        for g in gaps.iter().take(values.len()) {
            times.push(t);
            t += TimeDelta::hours(*g);
        }
        let original: Vec<Option<f64>> = values.iter().map(|v| v.map(f64::from)).collect();
        let mut filled = original.clone();
        let n = interpolate_series(&times, &mut filled);

        let first = original.iter().position(Option::is_some);
        let last = original.iter().rposition(Option::is_some);
        let mut expected_fills = 0;
        for i in 0..original.len() {
            match original[i] {
                // Known values never change.
                Some(v) => prop_assert_eq!(filled[i], Some(v)),
                None => {
                    let interior = matches!((first, last), (Some(f), Some(l)) if f < i && i < l);
                    if interior {
                        expected_fills += 1;
                        let prev = original[..i].iter().rev().find_map(|v| *v).unwrap();
                        let next = original[i + 1..].iter().find_map(|v| *v).unwrap();
                        let got = filled[i].unwrap();
                        prop_assert!(got >= prev.min(next) - 1e-9 && got <= prev.max(next) + 1e-9);
                    } else {
                        prop_assert_eq!(filled[i], None);
                    }
                }
            }
        }
        prop_assert_eq!(n, expected_fills);

        // Refilling a filled series is a no-op.
        let mut again = filled.clone();
        prop_assert_eq!(interpolate_series(&times, &mut again), 0);
        prop_assert_eq!(again, filled);
    }
}
