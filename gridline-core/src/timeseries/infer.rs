use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};

/// Estimate a representative spacing from positive adjacent deltas.
///
/// Prefer the mode (most frequent positive delta); if there is no unique mode,
/// return the lower median so the answer is always an observed cadence.
///
/// Input order does not matter; duplicates are ignored. Returns `None` if
/// fewer than two distinct timestamps are present.
///
/// ```
/// use chrono::{NaiveDate, TimeDelta};
/// use gridline_core::estimate_step;
///
/// let at = |m| NaiveDate::from_ymd_opt(2015, 1, 1).unwrap().and_hms_opt(0, m, 0).unwrap();
/// // Deltas: 15, 15, 15, 30  => unique mode 15 minutes
/// let ts = vec![at(0), at(15), at(30), at(45), at(15) + TimeDelta::minutes(60)];
/// assert_eq!(estimate_step(ts), Some(TimeDelta::minutes(15)));
/// ```
#[must_use]
pub fn estimate_step<I>(timestamps: I) -> Option<TimeDelta>
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    let mut ts: Vec<NaiveDateTime> = timestamps.into_iter().collect();
    ts.sort_unstable();
    ts.dedup();

    let mut counts: BTreeMap<TimeDelta, usize> = BTreeMap::new();
    for w in ts.windows(2) {
        *counts.entry(w[1] - w[0]).or_default() += 1;
    }
    let top = counts.values().copied().max()?;

    let mut modes = counts.iter().filter(|&(_, &n)| n == top);
    if let (Some((&mode, _)), None) = (modes.next(), modes.next()) {
        return Some(mode);
    }

    // No unique mode: walk the ordered counts to the lower median.
    let total: usize = counts.values().sum();
    let mut seen = 0;
    counts.into_iter().find_map(|(delta, n)| {
        seen += n;
        (2 * seen >= total).then_some(delta)
    })
}

/// Distinct `end - start` durations, in first-seen order.
///
/// Durations are measured between offset-aware instants, so a reading that
/// straddles a DST change reports its real elapsed length.
#[must_use]
pub fn distinct_intervals<I>(pairs: I) -> Vec<TimeDelta>
where
    I: IntoIterator<Item = (DateTime<FixedOffset>, DateTime<FixedOffset>)>,
{
    let mut out: Vec<TimeDelta> = Vec::new();
    for (start, end) in pairs {
        let d = end - start;
        if !out.contains(&d) {
            out.push(d);
        }
    }
    out
}

/// True if timestamps strictly increase with a constant spacing of `step`.
///
/// Empty and single-element sequences are regular.
#[must_use]
pub fn is_regular<I>(timestamps: I, step: TimeDelta) -> bool
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    let mut iter = timestamps.into_iter();
    let Some(mut prev) = iter.next() else {
        return true;
    };
    if step <= TimeDelta::zero() {
        return iter.next().is_none();
    }
    for cur in iter {
        if cur - prev != step {
            return false;
        }
        prev = cur;
    }
    true
}
