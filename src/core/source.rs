use async_trait::async_trait;

use crate::{core::generation::GenerationInterval, ops::Interval, prelude::*};

/// Provider of the generation mix time series.
#[async_trait]
pub trait IntervalSource: Sync {
    /// Fetch the intervals covering the time range, sorted by their start.
    ///
    /// Must fail instead of returning partial data.
    async fn fetch_intervals(&self, range: Interval) -> Result<Vec<GenerationInterval>>;
}
