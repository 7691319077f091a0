use chrono::{Datelike, NaiveDateTime};
use gridline_types::DayType;

use crate::table::TimeSeriesTable;

/// Column names of the derived calendar fields, in output order.
pub const CALENDAR_COLUMNS: [&str; 5] = ["year", "month", "day", "day_of_week", "day_type"];

/// Calendar features of one timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    /// Calendar year.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
    /// 0 = Monday ... 6 = Sunday.
    pub day_of_week: u32,
    /// Weekday for indexes below 5, weekend otherwise.
    pub day_type: DayType,
}

impl CalendarFields {
    /// Derive the fields from a timestamp's calendar date.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use gridline_core::CalendarFields;
    /// use gridline_types::DayType;
    ///
    /// let sat = NaiveDate::from_ymd_opt(2021, 3, 6).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let c = CalendarFields::of(sat);
    /// assert_eq!((c.year, c.month, c.day, c.day_of_week), (2021, 3, 6, 5));
    /// assert_eq!(c.day_type, DayType::Weekend);
    /// ```
    #[must_use]
    pub fn of(ts: NaiveDateTime) -> Self {
        let day_of_week = ts.weekday().num_days_from_monday();
        Self {
            year: ts.year(),
            month: ts.month(),
            day: ts.day(),
            day_of_week,
            day_type: DayType::from_day_of_week(day_of_week),
        }
    }
}

/// A joined table, optionally carrying per-row calendar features.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTable {
    table: TimeSeriesTable,
    calendar: Option<Vec<CalendarFields>>,
}

impl MergedTable {
    /// Wrap a table without calendar features.
    #[must_use]
    pub const fn without_calendar(table: TimeSeriesTable) -> Self {
        Self {
            table,
            calendar: None,
        }
    }

    /// The numeric part of the table.
    #[must_use]
    pub const fn table(&self) -> &TimeSeriesTable {
        &self.table
    }

    /// Calendar features aligned with the table rows, if derived.
    #[must_use]
    pub fn calendar(&self) -> Option<&[CalendarFields]> {
        self.calendar.as_deref()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// True when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Split into the numeric table and the calendar features.
    #[must_use]
    pub fn into_parts(self) -> (TimeSeriesTable, Option<Vec<CalendarFields>>) {
        (self.table, self.calendar)
    }
}

/// Compute calendar features for every row.
///
/// Pure function of each row's timestamp; the numeric fields are untouched.
#[must_use]
pub fn derive_calendar_fields(table: TimeSeriesTable) -> MergedTable {
    let calendar = table.timestamps().map(CalendarFields::of).collect();
    MergedTable {
        table,
        calendar: Some(calendar),
    }
}
