use gridline_core::{Aggregator, Frequency, GridError, RawSeries, RegularizeConfig, TimeSeriesTable};

use crate::report::RegularizeReport;
use crate::steps;

/// Output of one regularization run.
#[derive(Debug, Clone, PartialEq)]
pub struct Regularized {
    /// Gap-free table at the target frequency.
    pub table: TimeSeriesTable,
    /// What the run found along the way.
    pub report: RegularizeReport,
}

/// Turns a raw series into a regular, calendar-aligned one.
///
/// Pipeline: collapse intervals, scan for gaps, aggregate (optionally in two
/// stages), report nulls, interpolate. See [`crate::steps`] for the stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regularizer {
    pub(crate) cfg: RegularizeConfig,
}

/// Builder for a [`Regularizer`].
#[derive(Debug, Clone, Default)]
pub struct RegularizerBuilder {
    cfg: RegularizeConfig,
}

impl RegularizerBuilder {
    /// Start from the defaults: daily mean, estimated source interval,
    /// interpolation on.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frequency of the output grid.
    #[must_use]
    pub const fn target(mut self, f: Frequency) -> Self {
        self.cfg.target = f;
        self
    }

    /// Expected raw spacing for the gap scan.
    ///
    /// When unset the spacing is estimated from the data, which can miss a
    /// gap pattern that is itself the most common delta.
    #[must_use]
    pub const fn source_interval(mut self, f: Frequency) -> Self {
        self.cfg.source_interval = Some(f);
        self
    }

    /// Aggregate to `f` before the target stage.
    ///
    /// Useful when several stations report for the same instant: averaging
    /// them per hour first keeps a busy hour from outweighing a quiet one.
    #[must_use]
    pub const fn pre_aggregate(mut self, f: Frequency) -> Self {
        self.cfg.pre_aggregate = Some(f);
        self
    }

    /// Bucket reducer for every stage.
    #[must_use]
    pub const fn aggregator(mut self, a: Aggregator) -> Self {
        self.cfg.aggregator = a;
        self
    }

    /// Toggle interpolation of interior nulls.
    #[must_use]
    pub const fn interpolate(mut self, yes: bool) -> Self {
        self.cfg.interpolate = yes;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub const fn config(mut self, cfg: RegularizeConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the `Regularizer`.
    ///
    /// # Errors
    /// Returns `Err(GridError::InvalidArg)` if any frequency has a zero
    /// multiplier or the pre-aggregation stage is not strictly finer than the
    /// target.
    pub fn build(self) -> Result<Regularizer, GridError> {
        Regularizer::new(self.cfg)
    }
}

impl Regularizer {
    /// Start building a `Regularizer`.
    #[must_use]
    pub fn builder() -> RegularizerBuilder {
        RegularizerBuilder::new()
    }

    /// Create a `Regularizer` from a ready configuration.
    ///
    /// # Errors
    /// Returns `Err(GridError::InvalidArg)` if any frequency has a zero
    /// multiplier or the pre-aggregation stage is not strictly finer than the
    /// target.
    pub fn new(cfg: RegularizeConfig) -> Result<Self, GridError> {
        let stages = [
            ("target", Some(cfg.target)),
            ("source interval", cfg.source_interval),
            ("pre-aggregation stage", cfg.pre_aggregate),
        ];
        for (name, freq) in stages {
            if let Some(f) = freq
                && f.count() == 0
            {
                return Err(GridError::InvalidArg(format!("{name} {f} has a zero step")));
            }
        }
        if let Some(stage) = cfg.pre_aggregate
            && stage.step() >= cfg.target.step()
        {
            return Err(GridError::InvalidArg(format!(
                "pre-aggregation stage {stage} must be finer than target {}",
                cfg.target
            )));
        }
        Ok(Self { cfg })
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &RegularizeConfig {
        &self.cfg
    }

    /// Run the full pipeline.
    ///
    /// Never fails on well-formed input: gaps, nulls and uneven intervals end
    /// up in the report. An empty input yields an empty table.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gridline::regularize",
            skip(self, raw),
            fields(target = %self.cfg.target),
        )
    )]
    #[must_use]
    pub fn regularize(&self, raw: impl Into<RawSeries>) -> Regularized {
        let raw = raw.into();

        let (table, intervals) = steps::collapse_intervals(raw);
        let (source_step, missing_times) = steps::scan_gaps(&table, self.cfg.source_interval);
        let aggregated = steps::aggregate(&table, &self.cfg);
        let missing_values = steps::missing_values(&aggregated);
        let table = steps::fill_interior(aggregated, self.cfg.interpolate);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            target: "gridline::regularize",
            rows = table.len(),
            gaps = missing_times.len(),
            null_rows = missing_values.len(),
            "regularized series"
        );

        Regularized {
            table,
            report: RegularizeReport {
                source_step,
                intervals,
                missing_times,
                missing_values,
            },
        }
    }
}

impl Default for Regularizer {
    fn default() -> Self {
        Self {
            cfg: RegularizeConfig::default(),
        }
    }
}
