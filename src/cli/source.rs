use clap::Parser;
use reqwest::Url;

use crate::{api::carbon_intensity, prelude::*};

#[derive(Parser)]
pub struct SourceArgs {
    /// Carbon Intensity API base URL.
    #[clap(
        long = "api-url",
        env = "CARBON_INTENSITY_API_URL",
        default_value = carbon_intensity::Api::DEFAULT_BASE_URL
    )]
    url: Url,

    /// Request timeout, for example: `10s` or `1min`.
    #[clap(long = "api-timeout", env = "CARBON_INTENSITY_API_TIMEOUT", default_value = "10s")]
    timeout: humantime::Duration,
}

impl SourceArgs {
    pub fn new_client(&self) -> Result<carbon_intensity::Api> {
        carbon_intensity::Api::new(self.url.clone(), self.timeout.into())
    }
}
