use std::num::NonZeroU32;

use crate::core::error::AnalysisError;

/// Granularity of the interval source.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Resolution {
    intervals_per_hour: NonZeroU32,
}

impl Default for Resolution {
    /// Half-hourly, as published by the Carbon Intensity API.
    fn default() -> Self {
        Self::HALF_HOURLY
    }
}

impl Resolution {
    pub const HALF_HOURLY: Self = Self { intervals_per_hour: NonZeroU32::new(2).unwrap() };

    pub const fn new(intervals_per_hour: NonZeroU32) -> Self {
        Self { intervals_per_hour }
    }

    #[must_use]
    pub const fn intervals_per_hour(self) -> u32 {
        self.intervals_per_hour.get()
    }

    /// Number of intervals covering `duration_hours`.
    pub fn window_size(self, duration_hours: u32) -> Result<usize, AnalysisError> {
        if duration_hours == 0 {
            return Err(AnalysisError::InvalidDuration { duration_hours });
        }
        duration_hours
            .checked_mul(self.intervals_per_hour.get())
            .and_then(|window_size| usize::try_from(window_size).ok())
            .ok_or(AnalysisError::InvalidDuration { duration_hours })
    }
}
