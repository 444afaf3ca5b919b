//! Sample sources consumed by the chart.
//!
//! Fetching lives outside the engine: a store produces a complete
//! [`SampleSequence`] per range and the engine swaps it in atomically.

mod range;
mod synthetic;

pub use range::{RangePolicy, TimeRange};
pub use synthetic::{SyntheticSampleStore, SyntheticStoreConfig, TOTAL_VALUE_FLOOR_RATIO};

use async_trait::async_trait;

use crate::core::SampleSequence;
use crate::error::ChartResult;

/// Asynchronous provider of sample sequences.
///
/// Chart hosts are single threaded, so futures are not required to be `Send`.
#[async_trait(?Send)]
pub trait SampleStore {
    /// Human-readable name for logs.
    fn name(&self) -> &str;

    /// Produces the full ordered sequence for `range`. An empty sequence is a
    /// valid answer.
    async fn fetch_samples(&self, range: TimeRange) -> ChartResult<SampleSequence>;
}
