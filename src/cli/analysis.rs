use std::num::NonZeroU32;

use clap::Parser;

use crate::{
    core::{classifier::CleanFuels, resolution::Resolution},
    prelude::*,
};

#[derive(Parser)]
pub struct AnalysisArgs {
    /// Fuels counted as clean energy, case-insensitive.
    #[clap(
        long = "clean-fuels",
        env = "CLEAN_FUELS",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "biomass,nuclear,hydro,wind,solar",
    )]
    clean_fuels: Vec<String>,

    /// Number of intervals per hour published by the source.
    #[clap(long, env = "INTERVALS_PER_HOUR", default_value = "2")]
    intervals_per_hour: NonZeroU32,
}

impl AnalysisArgs {
    pub fn clean_fuels(&self) -> CleanFuels {
        self.clean_fuels.iter().collect()
    }

    pub const fn resolution(&self) -> Resolution {
        Resolution::new(self.intervals_per_hour)
    }

    /// Build the clean-fuel set and the resolution, logging them once.
    pub fn configure(&self) -> (CleanFuels, Resolution) {
        let clean_fuels = self.clean_fuels();
        let resolution = self.resolution();
        debug!(
            clean_fuels = %clean_fuels,
            intervals_per_hour = resolution.intervals_per_hour(),
            "configured",
        );
        (clean_fuels, resolution)
    }
}
