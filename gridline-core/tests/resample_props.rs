use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use gridline_core::{Aggregator, Frequency, Row, TimeSeriesTable, is_regular};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn arb_row() -> impl Strategy<Value = Row> {
    (
        0i64..(14 * 24 * 60),
        prop::option::of(-500i32..500),
        prop::option::of(0i32..100),
    )
        .prop_map(|(mins, a, b)| {
            Row::new(
                base() + TimeDelta::minutes(mins),
                vec![a.map(f64::from), b.map(f64::from)],
            )
        })
}

fn arb_table() -> impl Strategy<Value = TimeSeriesTable> {
    proptest::collection::vec(arb_row(), 0..300).prop_map(|rows| {
        TimeSeriesTable::from_rows("time", vec!["a".into(), "b".into()], rows).unwrap()
    })
}

fn day_start(ts: NaiveDateTime) -> NaiveDateTime {
    ts.date().and_hms_opt(0, 0, 0).unwrap()
}

fn close(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => (x - y).abs() < 1e-9,
        _ => false,
    }
}

proptest! {
    #[test]
    fn daily_mean_ignores_nulls(table in arb_table()) {
        let mut groups: BTreeMap<NaiveDateTime, Vec<&Row>> = BTreeMap::new();
        for r in table.rows() {
            groups.entry(day_start(r.ts)).or_default().push(r);
        }

        let out = table.group_by_bucket(Frequency::DAILY, Aggregator::Mean);
        let by_ts: BTreeMap<NaiveDateTime, &Row> = out.rows().iter().map(|r| (r.ts, r)).collect();

        for (day, rows) in &groups {
            let got = by_ts.get(day).expect("occupied bucket present");
            for col in 0..2 {
                let vals: Vec<f64> = rows.iter().filter_map(|r| r.values[col]).collect();
                #[allow(clippy::cast_precision_loss)]
                let expected = if vals.is_empty() {
                    None
                } else {
                    Some(vals.iter().sum::<f64>() / vals.len() as f64)
                };
                prop_assert!(close(got.values[col], expected), "{day} col {col}: {:?} vs {:?}", got.values[col], expected);
            }
        }

        // Buckets with no input rows are all-null.
        for r in out.rows() {
            if !groups.contains_key(&r.ts) {
                prop_assert!(r.values.iter().all(Option::is_none));
            }
        }
    }

    #[test]
    fn output_is_regular_and_spans_input(
        table in arb_table(),
        freq in prop::sample::select(vec![Frequency::Hours(1), Frequency::Hours(6), Frequency::DAILY, Frequency::WEEKLY]),
    ) {
        let out = table.group_by_bucket(freq, Aggregator::Mean);
        prop_assert!(is_regular(out.timestamps(), freq.step()));
        if let (Some(first), Some(last)) = (table.timestamps().min(), table.timestamps().max()) {
            let head = out.rows().first().unwrap().ts;
            let tail = out.rows().last().unwrap().ts;
            prop_assert!(head <= first && first < head + freq.step());
            prop_assert!(tail <= last && last < tail + freq.step());
        } else {
            prop_assert!(out.is_empty());
        }
    }

    #[test]
    fn resample_is_idempotent(
        table in arb_table(),
        freq in prop::sample::select(vec![Frequency::Minutes(30), Frequency::Hours(1), Frequency::DAILY, Frequency::WEEKLY]),
        agg in prop::sample::select(vec![Aggregator::Mean, Aggregator::Sum, Aggregator::Min, Aggregator::Max, Aggregator::First, Aggregator::Last]),
    ) {
        let once = table.group_by_bucket(freq, agg);
        let twice = once.group_by_bucket(freq, agg);
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn weekly_buckets_start_on_monday() {
    // 2021-03-06 is a Saturday; its bucket starts Monday 2021-03-01.
    let sat = NaiveDate::from_ymd_opt(2021, 3, 6)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    let t = TimeSeriesTable::from_rows("time", vec!["a".into()], vec![Row::new(sat, vec![Some(1.0)])])
        .unwrap();
    let out = t.group_by_bucket(Frequency::WEEKLY, Aggregator::Mean);
    assert_eq!(out.rows()[0].ts, base());
    assert_eq!(out.rows()[0].ts.weekday(), chrono::Weekday::Mon);
}

#[test]
fn aggregators_reduce_in_time_order() {
    let at = |h: u32| base().date().and_hms_opt(h, 0, 0).unwrap();
    let t = TimeSeriesTable::from_rows(
        "time",
        vec!["a".into()],
        vec![
            Row::new(at(5), vec![Some(3.0)]),
            Row::new(at(1), vec![Some(8.0)]),
            Row::new(at(3), vec![None]),
            Row::new(at(9), vec![Some(1.0)]),
        ],
    )
    .unwrap();
    let one = |agg| {
        t.group_by_bucket(Frequency::DAILY, agg).rows()[0].values[0]
    };
    assert_eq!(one(Aggregator::Mean), Some(4.0));
    assert_eq!(one(Aggregator::Sum), Some(12.0));
    assert_eq!(one(Aggregator::Min), Some(1.0));
    assert_eq!(one(Aggregator::Max), Some(8.0));
    assert_eq!(one(Aggregator::First), Some(8.0));
    assert_eq!(one(Aggregator::Last), Some(1.0));
}

#[test]
fn all_null_bucket_is_null_not_zero() {
    let day = |d: u32| NaiveDate::from_ymd_opt(2021, 3, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let t = TimeSeriesTable::from_rows(
        "time",
        vec!["a".into()],
        vec![
            Row::new(day(1), vec![Some(0.0)]),
            Row::new(day(2), vec![None]),
            Row::new(day(4), vec![Some(2.0)]),
        ],
    )
    .unwrap();
    let out = t.group_by_bucket(Frequency::DAILY, Aggregator::Mean);
    assert_eq!(out.column("a").unwrap(), vec![Some(0.0), None, None, Some(2.0)]);
    assert_eq!(out.rows_with_nulls().len(), 2);
}

#[test]
fn zero_step_frequency_yields_empty_table() {
    let t = TimeSeriesTable::from_rows(
        "time",
        vec!["a".into()],
        vec![Row::new(base(), vec![Some(1.0)])],
    )
    .unwrap();
    for freq in [Frequency::Minutes(0), Frequency::Days(0), Frequency::Weeks(0)] {
        let out = t.group_by_bucket(freq, Aggregator::Mean);
        assert!(out.is_empty(), "{freq}");
        assert_eq!(out.fields(), t.fields());
    }
}
