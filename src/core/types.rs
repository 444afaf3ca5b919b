use std::sync::Arc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::primitives::decimal_to_f64;
use crate::error::{ChartError, ChartResult};
use crate::store::TimeRange;

/// Plot surface size in pixels. Supplied per render; nothing derived from it
/// is cached across viewport changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SampleId(pub Uuid);

impl SampleId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

/// One time-stamped observation of invested capital vs. total value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub id: SampleId,
    pub timestamp: DateTime<Utc>,
    pub invested_value: f64,
    pub total_value: f64,
}

impl Sample {
    #[must_use]
    pub fn new(timestamp: DateTime<Utc>, invested_value: f64, total_value: f64) -> Self {
        Self {
            id: SampleId::new_random(),
            timestamp,
            invested_value,
            total_value,
        }
    }

    /// Builds a sample from exact money amounts.
    pub fn from_decimal_values(
        timestamp: DateTime<Utc>,
        invested_value: Decimal,
        total_value: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            timestamp,
            decimal_to_f64(invested_value, "invested value")?,
            decimal_to_f64(total_value, "total value")?,
        ))
    }

    #[must_use]
    pub fn returns(&self) -> f64 {
        self.total_value - self.invested_value
    }

    #[must_use]
    pub fn value(&self, track: ValueTrack) -> f64 {
        match track {
            ValueTrack::Invested => self.invested_value,
            ValueTrack::Total => self.total_value,
        }
    }
}

/// Selects which value of a sample a path traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueTrack {
    Invested,
    Total,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceId(pub Uuid);

impl SequenceId {
    #[must_use]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Immutable, ordered samples for one requested range.
///
/// Clones share storage and identity; a new range always produces a new
/// sequence rather than patching an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    id: SequenceId,
    range: Option<TimeRange>,
    samples: Arc<[Sample]>,
}

impl SampleSequence {
    /// Validates and freezes `samples`.
    ///
    /// Values must be finite and timestamps non-decreasing.
    pub fn new(samples: Vec<Sample>) -> ChartResult<Self> {
        for sample in &samples {
            if !sample.invested_value.is_finite() || !sample.total_value.is_finite() {
                return Err(ChartError::InvalidData(
                    "sample values must be finite".to_owned(),
                ));
            }
        }
        if samples
            .windows(2)
            .any(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(ChartError::InvalidData(
                "sample timestamps must be non-decreasing".to_owned(),
            ));
        }

        Ok(Self {
            id: SequenceId::new_random(),
            range: None,
            samples: samples.into(),
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self {
            id: SequenceId::new_random(),
            range: None,
            samples: Arc::from(Vec::new()),
        }
    }

    /// Tags the sequence with the range it was produced for.
    #[must_use]
    pub fn with_range(mut self, range: TimeRange) -> Self {
        self.range = Some(range);
        self
    }

    #[must_use]
    pub fn id(&self) -> SequenceId {
        self.id
    }

    #[must_use]
    pub fn range(&self) -> Option<TimeRange> {
        self.range
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }
}
