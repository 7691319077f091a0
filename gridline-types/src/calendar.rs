use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a date falls on a business day or on the weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Monday to Friday.
    Weekday,
    /// Saturday and Sunday.
    Weekend,
}

impl DayType {
    /// Classify a day-of-week index where 0 is Monday.
    #[must_use]
    pub const fn from_day_of_week(day_of_week: u32) -> Self {
        if day_of_week < 5 {
            Self::Weekday
        } else {
            Self::Weekend
        }
    }

    /// Label written to output files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weekday => "weekday",
            Self::Weekend => "weekend",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
