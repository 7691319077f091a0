use chrono::{NaiveDate, NaiveDateTime};
use gridline_core::{Frequency, Row, TimeSeriesTable, detect_gaps};
use proptest::prelude::*;

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2015, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn arb_frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(vec![
        Frequency::Minutes(30),
        Frequency::Minutes(15),
        Frequency::Hours(1),
        Frequency::Days(1),
        Frequency::Weeks(1),
    ])
}

proptest! {
    #[test]
    fn reports_exactly_the_removed_points(
        freq in arb_frequency(),
        offset_steps in 0i32..500,
        keep in proptest::collection::vec(any::<bool>(), 2..200),
    ) {
        let step = freq.step();
        let start = base() + step * offset_steps;
        let grid: Vec<NaiveDateTime> = (0..keep.len())
            .map(|i| start + step * i32::try_from(i).unwrap())
            .collect();

        // Endpoints stay so the grid span is fixed.
        let last = grid.len() - 1;
        let mut present = Vec::new();
        let mut removed = Vec::new();
        for (i, (&ts, &k)) in grid.iter().zip(&keep).enumerate() {
            if k || i == 0 || i == last {
                present.push(ts);
            } else {
                removed.push(ts);
            }
        }

        // Shuffle-ish: reversed input plus a duplicate must not matter.
        let mut input = present.clone();
        input.reverse();
        input.push(present[0]);

        prop_assert_eq!(detect_gaps(input, freq), removed);
    }

    #[test]
    fn complete_grid_has_no_gaps(freq in arb_frequency(), n in 0usize..100) {
        let step = freq.step();
        let ts: Vec<NaiveDateTime> = (0..n).map(|i| base() + step * i32::try_from(i).unwrap()).collect();
        prop_assert!(detect_gaps(ts, freq).is_empty());
    }
}

#[test]
fn half_hourly_gap_through_table_method() {
    let at = |h: u32, m: u32| base().date().and_hms_opt(h, m, 0).unwrap();
    let rows = [at(0, 0), at(0, 30), at(2, 0), at(2, 30)]
        .into_iter()
        .map(|ts| Row::new(ts, vec![Some(1.0)]))
        .collect();
    let table = TimeSeriesTable::from_rows("start", vec!["load".into()], rows).unwrap();

    let gaps = table.detect_gaps(Frequency::HALF_HOURLY);
    assert_eq!(gaps, vec![at(1, 0), at(1, 30)]);
    assert_eq!(table.len(), 4, "gap scan never alters the table");
}

#[test]
fn off_grid_readings_are_not_gaps() {
    let at = |h: u32, m: u32| base().date().and_hms_opt(h, m, 0).unwrap();
    let gaps = detect_gaps([at(0, 0), at(0, 17), at(1, 0)], Frequency::HALF_HOURLY);
    assert_eq!(gaps, vec![at(0, 30)]);
}

#[test]
fn zero_step_grid_has_no_gaps() {
    let at = |h: u32| base().date().and_hms_opt(h, 0, 0).unwrap();
    assert!(detect_gaps([at(0), at(3)], Frequency::Minutes(0)).is_empty());
    assert!(detect_gaps([at(0), at(3)], Frequency::Days(0)).is_empty());
}
