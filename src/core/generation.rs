use chrono::NaiveDate;

use crate::{core::classifier::CleanFuels, ops::Interval};

/// Share of a single fuel in an interval's generation mix.
#[derive(Clone, Debug, PartialEq)]
pub struct FuelShare {
    pub fuel: String,

    /// Percent, not a proportion.
    pub percentage: f64,
}

impl FuelShare {
    pub fn new(fuel: impl Into<String>, percentage: f64) -> Self {
        Self { fuel: fuel.into(), percentage }
    }
}

#[must_use]
#[derive(Clone, Debug)]
pub struct GenerationInterval {
    pub interval: Interval,

    /// Empty when the provider did not report a mix for the interval.
    pub generation_mix: Vec<FuelShare>,
}

impl GenerationInterval {
    pub const fn new(interval: Interval, generation_mix: Vec<FuelShare>) -> Self {
        Self { interval, generation_mix }
    }

    /// UTC calendar date the interval belongs to, by its start.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.interval.start.date_naive()
    }

    /// Total percentage of the clean fuels.
    #[must_use]
    pub fn clean_score(&self, clean_fuels: &CleanFuels) -> f64 {
        self.generation_mix
            .iter()
            .filter(|share| clean_fuels.is_clean(&share.fuel))
            .map(|share| share.percentage)
            .sum()
    }
}
