//! Timestamp parsing with timezone stripping.
//!
//! Every table stores naive local wall-clock time. Offset-qualified input
//! such as `2015-01-01 01:00:00+01:00` keeps its wall time (`01:00`) and
//! loses the offset, so grouping works on one consistent calendar. The offset
//! is kept on the side for callers that need real elapsed durations.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset};
use gridline_types::GridError;

const AWARE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d-%b-%Y %H:%M:%S",
    "%d-%b-%Y %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%b-%Y", "%Y/%m/%d"];

/// A parsed timestamp: local wall time plus the offset it was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTimestamp {
    /// Wall-clock time with any offset removed.
    pub local: NaiveDateTime,
    /// Offset present in the input, if any.
    pub offset: Option<FixedOffset>,
}

impl ParsedTimestamp {
    /// The instant this timestamp denotes. Naive input is read as UTC.
    #[must_use]
    pub fn instant(&self) -> DateTime<FixedOffset> {
        let offset = self.offset.unwrap_or_else(|| chrono::Utc.fix());
        match self.local.and_local_timezone(offset) {
            chrono::LocalResult::Single(dt) => dt,
            _ => self.local.and_utc().fixed_offset(),
        }
    }
}

impl From<DateTime<FixedOffset>> for ParsedTimestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self {
            local: dt.naive_local(),
            offset: Some(*dt.offset()),
        }
    }
}

/// Parses timestamps against caller formats first, then a built-in list.
///
/// Built-in forms: RFC 3339, `YYYY-MM-DD HH:MM[:SS[.f]]` with or without an
/// offset, `DD-mon-YYYY HH:MM` (month name in any case), `YYYY/MM/DD`, and
/// bare dates (read as midnight).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampParser {
    custom: Vec<String>,
}

impl TimestampParser {
    /// Parser with only the built-in formats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Try `format` (a `strftime` pattern) before the built-in list.
    ///
    /// The pattern may describe an offset-aware datetime, a naive datetime,
    /// or a date.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.custom.push(format.into());
        self
    }

    /// Caller-supplied formats in trial order.
    #[must_use]
    pub fn formats(&self) -> &[String] {
        &self.custom
    }

    /// Parse one timestamp.
    ///
    /// # Errors
    /// Returns `Err(GridError::Parse)` when no format matches.
    ///
    /// ```
    /// use gridline_core::TimestampParser;
    ///
    /// let p = TimestampParser::new();
    /// let t = p.parse("2015-01-01 01:00:00+01:00").unwrap();
    /// assert_eq!(t.local.to_string(), "2015-01-01 01:00:00");
    /// assert!(t.offset.is_some());
    ///
    /// let w = p.parse("1-jan-1990 13:00").unwrap();
    /// assert_eq!(w.local.to_string(), "1990-01-01 13:00:00");
    ///
    /// assert!(p.parse("not a date").is_err());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<ParsedTimestamp, GridError> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(GridError::parse("timestamp", raw, "empty value"));
        }

        for f in &self.custom {
            if let Some(t) = try_format(s, f) {
                return Ok(t);
            }
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(dt.into());
        }
        for f in AWARE_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, f) {
                return Ok(dt.into());
            }
        }
        for f in NAIVE_DATETIME_FORMATS {
            if let Ok(local) = NaiveDateTime::parse_from_str(s, f) {
                return Ok(ParsedTimestamp {
                    local,
                    offset: None,
                });
            }
        }
        for f in DATE_FORMATS {
            if let Some(t) = parse_date(s, f) {
                return Ok(t);
            }
        }

        Err(GridError::parse(
            "timestamp",
            raw,
            "no known date or datetime format matched",
        ))
    }
}

fn parse_date(s: &str, format: &str) -> Option<ParsedTimestamp> {
    let date = NaiveDate::parse_from_str(s, format).ok()?;
    Some(ParsedTimestamp {
        local: date.and_hms_opt(0, 0, 0)?,
        offset: None,
    })
}

fn try_format(s: &str, format: &str) -> Option<ParsedTimestamp> {
    if let Ok(dt) = DateTime::parse_from_str(s, format) {
        return Some(dt.into());
    }
    if let Ok(local) = NaiveDateTime::parse_from_str(s, format) {
        return Some(ParsedTimestamp {
            local,
            offset: None,
        });
    }
    parse_date(s, format)
}

/// Parse with the built-in formats only.
///
/// # Errors
/// Returns `Err(GridError::Parse)` when no format matches.
pub fn parse_timestamp(raw: &str) -> Result<ParsedTimestamp, GridError> {
    TimestampParser::new().parse(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    #[test]
    fn strips_offset_keeping_wall_time() {
        let t = parse_timestamp("2015-03-29 03:00:00+02:00").unwrap();
        assert_eq!(t.local.to_string(), "2015-03-29 03:00:00");
        assert_eq!(t.offset.unwrap().local_minus_utc(), 7200);
    }

    #[test]
    fn rfc3339_and_iso_variants() {
        for raw in [
            "2015-01-01T00:00:00Z",
            "2015-01-01T00:00:00+00:00",
            "2015-01-01 00:00:00",
            "2015-01-01T00:00",
            "2015-01-01",
            "2015/01/01 00:00:00",
        ] {
            let t = parse_timestamp(raw).unwrap_or_else(|e| panic!("{raw}: {e}"));
            assert_eq!(t.local.to_string(), "2015-01-01 00:00:00", "{raw}");
        }
    }

    #[test]
    fn month_names_are_case_insensitive() {
        let a = parse_timestamp("01-JAN-1990 00:00").unwrap();
        let b = parse_timestamp("01-jan-1990 00:00").unwrap();
        assert_eq!(a.local, b.local);
    }

    #[test]
    fn custom_format_wins() {
        let p = TimestampParser::new().with_format("%d-%m-%y");
        let t = p.parse("06-03-21").unwrap();
        assert_eq!(t.local.to_string(), "2021-03-06 00:00:00");
        assert_eq!(p.formats(), &["%d-%m-%y".to_string()]);
    }

    #[test]
    fn instants_measure_real_elapsed_time() {
        let a = parse_timestamp("2015-03-29 01:30:00+01:00").unwrap();
        let b = parse_timestamp("2015-03-29 03:00:00+02:00").unwrap();
        assert_eq!(b.instant() - a.instant(), TimeDelta::minutes(30));
    }

    #[test]
    fn empty_is_a_parse_error() {
        assert!(matches!(
            parse_timestamp("  "),
            Err(GridError::Parse { .. })
        ));
    }
}
