use async_trait::async_trait;
use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Sample, SampleSequence};
use crate::error::{ChartError, ChartResult};

use super::{SampleStore, TimeRange};

/// Total value never dips below this multiple of invested capital.
pub const TOTAL_VALUE_FLOOR_RATIO: f64 = 1.05;

/// Parameters of the synthetic portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticStoreConfig {
    /// "Now" for every generated range.
    pub anchor: DateTime<Utc>,
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    /// Linear yearly drift applied on top of invested capital.
    pub annual_return: f64,
    /// Relative amplitude of the oscillation around the drift.
    pub volatility: f64,
    /// Phase offset so separate stores produce different curves.
    pub phase: f64,
}

impl SyntheticStoreConfig {
    #[must_use]
    pub fn new(anchor: DateTime<Utc>) -> Self {
        Self {
            anchor,
            initial_investment: 10_000.0,
            monthly_contribution: 500.0,
            annual_return: 0.08,
            volatility: 0.04,
            phase: 0.0,
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (field, value) in [
            ("initial investment", self.initial_investment),
            ("monthly contribution", self.monthly_contribution),
            ("volatility", self.volatility),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{field} must be finite and >= 0"
                )));
            }
        }
        if !self.annual_return.is_finite() || !self.phase.is_finite() {
            return Err(ChartError::InvalidData(
                "annual return and phase must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Deterministic stand-in for a portfolio backend.
///
/// Values are a pure function of the timestamp, so overlapping ranges agree
/// on shared instants. Contributions accrue every 30 days since an inception
/// date five years before the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticSampleStore {
    config: SyntheticStoreConfig,
    inception: DateTime<Utc>,
}

impl SyntheticSampleStore {
    pub fn new(config: SyntheticStoreConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let inception = config
            .anchor
            .checked_sub_months(Months::new(60))
            .ok_or_else(|| ChartError::InvalidData("anchor is too early".to_owned()))?;
        Ok(Self { config, inception })
    }

    #[must_use]
    pub fn config(&self) -> SyntheticStoreConfig {
        self.config
    }

    /// Generates the samples for `range` without going through the async trait.
    pub fn generate(&self, range: TimeRange) -> ChartResult<SampleSequence> {
        let policy = range.policy(self.config.anchor);
        let samples: Vec<Sample> = policy
            .timestamps()
            .into_iter()
            .map(|timestamp| self.sample_at(timestamp))
            .collect();
        debug!(
            range = range.label(),
            count = samples.len(),
            "generated synthetic samples"
        );
        Ok(SampleSequence::new(samples)?.with_range(range))
    }

    fn sample_at(&self, timestamp: DateTime<Utc>) -> Sample {
        let days = (timestamp - self.inception).num_seconds().max(0) as f64 / 86_400.0;
        let contributions = (days / 30.0).floor();
        let invested =
            self.config.initial_investment + self.config.monthly_contribution * contributions;

        let years = days / 365.25;
        let drift = 1.0 + self.config.annual_return * years;
        let wave = (days * 0.21 + self.config.phase).sin() * 0.6
            + (days * 0.037 + self.config.phase * 0.5).sin() * 0.4;
        let total = invested * (drift + self.config.volatility * wave);
        let total = total.max(invested * TOTAL_VALUE_FLOOR_RATIO);

        Sample::new(timestamp, invested, total)
    }
}

#[async_trait(?Send)]
impl SampleStore for SyntheticSampleStore {
    fn name(&self) -> &str {
        "synthetic"
    }

    async fn fetch_samples(&self, range: TimeRange) -> ChartResult<SampleSequence> {
        self.generate(range)
    }
}
