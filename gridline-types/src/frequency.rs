//! Sampling frequencies used for gap detection and bucket boundaries.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::GridError;

/// Spacing of a regular time grid.
///
/// Fixed-step variants (`Minutes`, `Hours`, `Days`) align their buckets to the
/// midnight of the first observation's day. `Weeks` aligns to Monday 00:00.
/// Parsed codes always carry a multiplier of at least one. A variant built
/// directly with zero is rejected by `Regularizer` construction, and the
/// table primitives treat it as an empty grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    /// Every `n` minutes.
    Minutes(u32),
    /// Every `n` hours.
    Hours(u32),
    /// Every `n` calendar days.
    Days(u32),
    /// Every `n` weeks, Monday start.
    ///
    /// Buckets are labelled with their opening Monday, not with the closing
    /// Sunday that pandas' `W` (`W-SUN`) uses for the same span.
    Weeks(u32),
}

impl Frequency {
    /// Half-hourly readings, the native cadence of most grid operators.
    pub const HALF_HOURLY: Self = Self::Minutes(30);
    /// One bucket per hour.
    pub const HOURLY: Self = Self::Hours(1);
    /// One bucket per calendar day.
    pub const DAILY: Self = Self::Days(1);
    /// One bucket per week.
    pub const WEEKLY: Self = Self::Weeks(1);

    /// Width of one step.
    #[must_use]
    pub fn step(self) -> TimeDelta {
        match self {
            Self::Minutes(n) => TimeDelta::minutes(i64::from(n)),
            Self::Hours(n) => TimeDelta::hours(i64::from(n)),
            Self::Days(n) => TimeDelta::days(i64::from(n)),
            Self::Weeks(n) => TimeDelta::weeks(i64::from(n)),
        }
    }

    /// Multiplier of the base unit.
    #[must_use]
    pub const fn count(self) -> u32 {
        match self {
            Self::Minutes(n) | Self::Hours(n) | Self::Days(n) | Self::Weeks(n) => n,
        }
    }

    /// True when buckets are anchored to Monday rather than to midnight.
    #[must_use]
    pub const fn is_weekly(self) -> bool {
        matches!(self, Self::Weeks(_))
    }

    /// Canonical short code, e.g. `30min`, `1h`, `1D`, `2W`.
    #[must_use]
    pub fn code(self) -> String {
        match self {
            Self::Minutes(n) => format!("{n}min"),
            Self::Hours(n) => format!("{n}h"),
            Self::Days(n) => format!("{n}D"),
            Self::Weeks(n) => format!("{n}W"),
        }
    }

    /// Find the smallest frequency whose step equals `delta`, if any.
    ///
    /// Prefers the coarsest unit that divides evenly, so 86 400 s is `1D`
    /// rather than `24h`.
    #[must_use]
    pub fn from_step(delta: TimeDelta) -> Option<Self> {
        let secs = delta.num_seconds();
        if secs <= 0 || secs % 60 != 0 || delta.subsec_nanos() != 0 {
            return None;
        }
        let mins = secs / 60;
        let fit = |unit: i64| -> Option<u32> {
            if mins % unit == 0 {
                u32::try_from(mins / unit).ok()
            } else {
                None
            }
        };
        if let Some(n) = fit(7 * 24 * 60) {
            return Some(Self::Weeks(n));
        }
        if let Some(n) = fit(24 * 60) {
            return Some(Self::Days(n));
        }
        if let Some(n) = fit(60) {
            return Some(Self::Hours(n));
        }
        fit(1).map(Self::Minutes)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::DAILY
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl FromStr for Frequency {
    type Err = GridError;

    /// Parse a short code: an optional positive multiplier followed by a unit.
    ///
    /// Units: `min`/`m`/`T` (minutes), `h`/`H` (hours), `d`/`D` (days),
    /// `w`/`W` (weeks). Upper-case `M` is rejected because it usually means
    /// "month" in other tools.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let split = raw
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| GridError::InvalidFrequency(s.to_string()))?;
        let (digits, unit) = raw.split_at(split);
        let n: u32 = if digits.is_empty() {
            1
        } else {
            digits
                .parse()
                .map_err(|_| GridError::InvalidFrequency(s.to_string()))?
        };
        if n == 0 {
            return Err(GridError::InvalidFrequency(s.to_string()));
        }
        match unit {
            "min" | "m" | "T" => Ok(Self::Minutes(n)),
            "h" | "H" => Ok(Self::Hours(n)),
            "d" | "D" => Ok(Self::Days(n)),
            "w" | "W" => Ok(Self::Weeks(n)),
            _ => Err(GridError::InvalidFrequency(s.to_string())),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = GridError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(f: Frequency) -> Self {
        f.code()
    }
}
