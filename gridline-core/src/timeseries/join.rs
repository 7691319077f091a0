use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;
use gridline_types::GridError;

use crate::table::{Row, TimeSeriesTable};

/// Output field names for a join, suffixing names present on both sides.
fn joined_fields(
    left: &TimeSeriesTable,
    right: &TimeSeriesTable,
    left_suffix: &str,
    right_suffix: &str,
) -> Vec<String> {
    let left_names: HashSet<&str> = left.fields().iter().map(String::as_str).collect();
    let right_names: HashSet<&str> = right.fields().iter().map(String::as_str).collect();
    let lhs = left.fields().iter().map(|f| {
        if right_names.contains(f.as_str()) {
            format!("{f}{left_suffix}")
        } else {
            f.clone()
        }
    });
    let rhs = right.fields().iter().map(|f| {
        if left_names.contains(f.as_str()) {
            format!("{f}{right_suffix}")
        } else {
            f.clone()
        }
    });
    lhs.chain(rhs).collect()
}

/// Inner join on timestamp equality.
///
/// - Timestamps present on only one side are dropped without error.
/// - Output is sorted by timestamp and keyed on the left table's time column.
/// - Duplicate timestamps within one input: the first occurrence wins, so the
///   row count never exceeds `min(left.len(), right.len())`.
/// - Left fields come first, then right fields. A name present on both sides
///   gets `left_suffix` / `right_suffix`.
///
/// # Errors
/// Returns `Err(GridError::InvalidArg)` if suffixing still leaves duplicate
/// column names.
///
/// ```
/// use chrono::NaiveDate;
/// use gridline_core::{inner_join, Row, TimeSeriesTable};
///
/// let day = |d| NaiveDate::from_ymd_opt(2015, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let a = TimeSeriesTable::from_rows("time", vec!["load".into()],
///     (1..=3).map(|d| Row::new(day(d), vec![Some(f64::from(d))])).collect()).unwrap();
/// let b = TimeSeriesTable::from_rows("time", vec!["temp".into()],
///     (2..=4).map(|d| Row::new(day(d), vec![Some(10.0)])).collect()).unwrap();
/// let j = inner_join(&a, &b, "_x", "_y").unwrap();
/// assert_eq!(j.timestamps().collect::<Vec<_>>(), vec![day(2), day(3)]);
/// ```
pub fn inner_join(
    left: &TimeSeriesTable,
    right: &TimeSeriesTable,
    left_suffix: &str,
    right_suffix: &str,
) -> Result<TimeSeriesTable, GridError> {
    let fields = joined_fields(left, right, left_suffix, right_suffix);

    let mut right_by_ts: BTreeMap<NaiveDateTime, &Row> = BTreeMap::new();
    for r in right.rows() {
        right_by_ts.entry(r.ts).or_insert(r);
    }

    let mut left_by_ts: BTreeMap<NaiveDateTime, &Row> = BTreeMap::new();
    for r in left.rows() {
        left_by_ts.entry(r.ts).or_insert(r);
    }

    let rows: Vec<Row> = left_by_ts
        .into_iter()
        .filter_map(|(ts, l)| {
            right_by_ts.get(&ts).map(|r| {
                let mut values = Vec::with_capacity(l.values.len() + r.values.len());
                values.extend_from_slice(&l.values);
                values.extend_from_slice(&r.values);
                Row::new(ts, values)
            })
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "gridline::join",
        left = left.len(),
        right = right.len(),
        joined = rows.len(),
        "inner join on time key"
    );

    TimeSeriesTable::from_rows(left.time_column().to_string(), fields, rows)
}
