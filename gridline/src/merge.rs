use gridline_core::{
    GridError, MergeConfig, MergedTable, TimeSeriesTable, derive_calendar_fields, inner_join,
};

use crate::report::MergeReport;

/// Output of one merge run.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged {
    /// Joined rows, with calendar features when configured.
    pub table: MergedTable,
    /// Row counts and remaining nulls.
    pub report: MergeReport,
}

/// Joins two regularized tables on their timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Merger {
    cfg: MergeConfig,
}

impl Merger {
    /// Create a merger with the given configuration.
    #[must_use]
    pub const fn new(cfg: MergeConfig) -> Self {
        Self { cfg }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &MergeConfig {
        &self.cfg
    }

    /// Inner-join `left` and `right`, then derive calendar features.
    ///
    /// Timestamps present on one side only are dropped silently; the count
    /// is visible in the report. Nulls carried in from either side are kept.
    ///
    /// # Errors
    /// Returns `Err(GridError::InvalidArg)` if the suffixes still leave
    /// duplicate column names.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gridline::merge",
            skip(self, left, right),
            fields(left = left.len(), right = right.len()),
        )
    )]
    pub fn merge(
        &self,
        left: &TimeSeriesTable,
        right: &TimeSeriesTable,
    ) -> Result<Merged, GridError> {
        let joined = inner_join(left, right, &self.cfg.left_suffix, &self.cfg.right_suffix)?;
        let missing_values = joined.rows_with_nulls();

        #[cfg(feature = "tracing")]
        {
            if !missing_values.is_empty() {
                tracing::warn!(
                    target: "gridline::merge",
                    rows = missing_values.len(),
                    "merged table has missing values"
                );
            }
        }

        let report = MergeReport {
            left_rows: left.len(),
            right_rows: right.len(),
            joined_rows: joined.len(),
            missing_values,
        };
        let table = if self.cfg.calendar {
            derive_calendar_fields(joined)
        } else {
            MergedTable::without_calendar(joined)
        };
        Ok(Merged { table, report })
    }
}
