use chrono::{Datelike, NaiveDateTime, TimeDelta};
use gridline_types::{Aggregator, Frequency};

use crate::table::{Row, TimeSeriesTable};

/// Start of the first bucket for a series whose earliest timestamp is `first`.
///
/// Fixed-step frequencies start at that day's midnight, so `Days(1)` buckets
/// run midnight to midnight and `Hours(1)` buckets start on the hour. Weekly
/// buckets start on the Monday on or before `first`.
#[must_use]
pub fn bucket_origin(first: NaiveDateTime, frequency: Frequency) -> NaiveDateTime {
    let midnight = first.date().and_hms_opt(0, 0, 0).unwrap_or(first);
    if frequency.is_weekly() {
        let back = i64::from(first.weekday().num_days_from_monday());
        return midnight
            .checked_sub_signed(TimeDelta::days(back))
            .unwrap_or(midnight);
    }
    midnight
}

/// Index of the bucket `ts` falls into, counted from `origin`.
fn bucket_index(ts: NaiveDateTime, origin: NaiveDateTime, step_secs: i64) -> i64 {
    (ts - origin).num_seconds().div_euclid(step_secs)
}

/// Running statistics for one field in one bucket.
#[derive(Debug, Clone, Copy, Default)]
struct FieldAcc {
    count: usize,
    sum: f64,
    min: f64,
    max: f64,
    first: Option<f64>,
    last: Option<f64>,
}

impl FieldAcc {
    fn push(&mut self, v: f64) {
        if self.count == 0 {
            self.min = v;
            self.max = v;
            self.first = Some(v);
        } else {
            self.min = self.min.min(v);
            self.max = self.max.max(v);
        }
        self.count += 1;
        self.sum += v;
        self.last = Some(v);
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Reduce to one value. Reducers this build does not know fall back to
    /// [`Aggregator::Mean`], the configured default.
    fn finish(&self, agg: Aggregator) -> Option<f64> {
        if self.count == 0 {
            return None;
        }
        match agg {
            Aggregator::Sum => Some(self.sum),
            Aggregator::Min => Some(self.min),
            Aggregator::Max => Some(self.max),
            Aggregator::First => self.first,
            Aggregator::Last => self.last,
            Aggregator::Mean => Some(self.mean()),
            _ => Some(self.mean()),
        }
    }
}

/// Partition rows into calendar-aligned buckets of `frequency` and reduce each
/// field with `aggregator`.
///
/// - Rows are sorted first; input order does not matter.
/// - Nulls are ignored. A field with no non-null value in a bucket is null.
/// - Every bucket between the first and last occupied one is emitted. Buckets
///   that received no rows come out with all fields null, which is how "no
///   data collected" stays distinguishable from a reading of zero.
/// - Output timestamps are bucket starts, strictly increasing with spacing
///   `frequency.step()`.
/// - A frequency with a zero multiplier has no buckets; the result is empty.
///
/// ```
/// use chrono::NaiveDate;
/// use gridline_core::{Row, TimeSeriesTable};
/// use gridline_types::{Aggregator, Frequency};
///
/// let at = |d, h| NaiveDate::from_ymd_opt(2015, 1, d).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// let raw = TimeSeriesTable::from_rows("time", vec!["load".into()], vec![
///     Row::new(at(1, 0), vec![Some(10.0)]),
///     Row::new(at(1, 12), vec![Some(20.0)]),
///     Row::new(at(3, 6), vec![Some(7.0)]),
/// ]).unwrap();
/// let daily = raw.group_by_bucket(Frequency::DAILY, Aggregator::Mean);
/// assert_eq!(daily.column("load").unwrap(), vec![Some(15.0), None, Some(7.0)]);
/// ```
#[must_use]
pub fn group_by_bucket(
    table: &TimeSeriesTable,
    frequency: Frequency,
    aggregator: Aggregator,
) -> TimeSeriesTable {
    let sorted = table.sort_by_time();
    let rows = sorted.rows();
    let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
        return table.empty_like();
    };

    let step_secs = frequency.step().num_seconds();
    if step_secs <= 0 {
        return table.empty_like();
    }
    let origin = bucket_origin(first.ts, frequency);
    let first_idx = bucket_index(first.ts, origin, step_secs);
    let last_idx = bucket_index(last.ts, origin, step_secs);
    let width = table.fields().len();
    let n_buckets = usize::try_from(last_idx - first_idx + 1).unwrap_or(0);

    let mut accs: Vec<Vec<FieldAcc>> = vec![vec![FieldAcc::default(); width]; n_buckets];
    for r in rows {
        let Ok(slot) = usize::try_from(bucket_index(r.ts, origin, step_secs) - first_idx) else {
            continue;
        };
        let bucket = &mut accs[slot];
        for (acc, v) in bucket.iter_mut().zip(&r.values) {
            if let Some(v) = v.filter(|x| !x.is_nan()) {
                acc.push(v);
            }
        }
    }

    let mut out: Vec<Row> = Vec::with_capacity(n_buckets);
    for (offset, bucket) in (first_idx..).zip(accs) {
        let Some(ts) = origin.checked_add_signed(TimeDelta::seconds(offset * step_secs)) else {
            continue;
        };
        out.push(Row::new(
            ts,
            bucket.iter().map(|acc| acc.finish(aggregator)).collect(),
        ));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "gridline::resample",
        frequency = %frequency,
        rows_in = rows.len(),
        buckets = out.len(),
        "grouped rows into buckets"
    );

    table.with_rows(out)
}
