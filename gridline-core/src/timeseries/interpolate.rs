use chrono::NaiveDateTime;
use gridline_types::GridError;

use crate::table::{Row, TimeSeriesTable};

/// Fill interior nulls of one series by linear interpolation over elapsed time.
///
/// `times` must be sorted ascending and have the same length as `values`.
/// Each null with a known neighbour on both sides becomes
/// `v0 + (v1 - v0) * (t - t0) / (t1 - t0)`. Leading and trailing nulls stay
/// null. Returns the number of values filled.
///
/// ```
/// use chrono::NaiveDate;
/// use gridline_core::timeseries::interpolate::interpolate_series;
///
/// let at = |h| NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(h, 0, 0).unwrap();
/// // Uneven spacing: the gap sits one hour after 0.0 and three hours before 4.0.
/// let times = [at(0), at(1), at(4)];
/// let mut values = [Some(0.0), None, Some(4.0)];
/// assert_eq!(interpolate_series(&times, &mut values), 1);
/// assert_eq!(values[1], Some(1.0));
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn interpolate_series(times: &[NaiveDateTime], values: &mut [Option<f64>]) -> usize {
    debug_assert_eq!(times.len(), values.len());
    let mut filled = 0;
    let mut prev: Option<usize> = None;
    for i in 0..values.len().min(times.len()) {
        let Some(v1) = values[i] else {
            continue;
        };
        if let Some(p) = prev
            && i > p + 1
            && let Some(v0) = values[p]
        {
            let t0 = times[p];
            let span = (times[i] - t0).num_milliseconds() as f64;
            for slot in (p + 1)..i {
                let v = if span > 0.0 {
                    let w = (times[slot] - t0).num_milliseconds() as f64 / span;
                    (v1 - v0).mul_add(w, v0)
                } else {
                    v0
                };
                values[slot] = Some(v);
                filled += 1;
            }
        }
        prev = Some(i);
    }
    filled
}

pub(crate) fn interpolate_columns(table: &TimeSeriesTable, columns: &[usize]) -> TimeSeriesTable {
    let sorted = table.sort_by_time();
    let times: Vec<NaiveDateTime> = sorted.timestamps().collect();
    let mut rows: Vec<Row> = sorted.into_rows();

    for &col in columns {
        let mut series: Vec<Option<f64>> = rows.iter().map(|r| r.values[col]).collect();
        let _filled = interpolate_series(&times, &mut series);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "gridline::interpolate",
            field = %table.fields()[col],
            filled = _filled,
            "interpolated interior nulls"
        );
        for (r, v) in rows.iter_mut().zip(series) {
            r.values[col] = v;
        }
    }

    table.with_rows(rows)
}

/// Fill interior nulls of the named fields, weighting by elapsed time.
///
/// Rows are sorted by timestamp first. Fields not listed are copied as is.
/// Because the weights use real elapsed time and not row positions, the
/// result stays correct when spacing is uneven; on a regular grid it
/// coincides with plain linear interpolation.
///
/// # Errors
/// Returns `Err(GridError::UnknownField)` if a listed field does not exist.
pub fn interpolate_by_time(
    table: &TimeSeriesTable,
    fields: &[&str],
) -> Result<TimeSeriesTable, GridError> {
    let columns: Vec<usize> = fields
        .iter()
        .map(|f| table.field_index(f))
        .collect::<Result<_, _>>()?;
    Ok(interpolate_columns(table, &columns))
}
