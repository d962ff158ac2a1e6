//! [Carbon Intensity API](https://carbon-intensity.github.io/api-definitions/) client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Url;
use serde::{Deserialize, Deserializer, de};

use crate::{
    core::{
        generation::{FuelShare, GenerationInterval},
        source::IntervalSource,
    },
    ops::Interval,
    prelude::*,
};

/// Timestamp format used both in the request path and in the response.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

pub struct Api {
    client: reqwest::Client,
    base_url: Url,
}

impl Api {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.carbonintensity.org.uk";

    #[instrument(skip_all, fields(base_url = %base_url))]
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn generation_url(&self, range: Interval) -> Result<Url> {
        let from = range.start.format(TIMESTAMP_FORMAT).to_string();
        let to = range.end.format(TIMESTAMP_FORMAT).to_string();
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("`{}` cannot be a base URL", self.base_url))?
            .pop_if_empty()
            .extend(["generation", from.as_str(), to.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl IntervalSource for Api {
    #[instrument(skip_all, fields(range = ?range))]
    async fn fetch_intervals(&self, range: Interval) -> Result<Vec<GenerationInterval>> {
        let url = self.generation_url(range)?;
        info!(%url, "fetching…");
        let response: Response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("failed to request the generation mix from `{url}`"))?
            .error_for_status()
            .with_context(|| format!("`{url}` responded with an error"))?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{url}`"))?;
        let intervals = response.into_intervals();
        info!(n_intervals = intervals.len(), "fetched");
        Ok(intervals)
    }
}

#[derive(Deserialize)]
struct Response {
    data: Vec<Data>,
}

impl Response {
    fn into_intervals(self) -> Vec<GenerationInterval> {
        let mut intervals: Vec<GenerationInterval> = self
            .data
            .into_iter()
            .map(|data| {
                let generation_mix = data
                    .generation_mix
                    .unwrap_or_default()
                    .into_iter()
                    .map(|item| FuelShare::new(item.fuel, item.percentage))
                    .collect();
                GenerationInterval::new(Interval::new(data.from, data.to), generation_mix)
            })
            .collect();
        intervals.sort_by_key(|interval| interval.interval.start);
        intervals
    }
}

#[derive(Deserialize)]
struct Data {
    #[serde(deserialize_with = "deserialize_timestamp")]
    from: DateTime<Utc>,

    #[serde(deserialize_with = "deserialize_timestamp")]
    to: DateTime<Utc>,

    #[serde(rename = "generationmix", default)]
    generation_mix: Option<Vec<GenerationMixItem>>,
}

#[derive(Deserialize)]
struct GenerationMixItem {
    fuel: String,

    #[serde(rename = "perc")]
    percentage: f64,
}

/// The API omits the seconds, so it is not quite RFC 3339.
fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let timestamp = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT)
        .map(|timestamp| timestamp.and_utc())
        .map_err(|_| {
            de::Error::invalid_value(de::Unexpected::Str(&timestamp), &"a `YYYY-MM-DDThh:mmZ` timestamp")
        })
}
