use bon::Builder;
use chrono::{DateTime, Days, NaiveTime, TimeDelta, Utc};

use crate::{
    core::{
        classifier::CleanFuels,
        daily::{DailyEnergyMix, aggregate_by_day},
        error::AnalysisError,
        generation::GenerationInterval,
        resolution::Resolution,
        source::IntervalSource,
        window::{ChargingWindow, find_optimal_window},
    },
    ops::Interval,
    prelude::*,
};

/// How far ahead the charging window is searched for.
const LOOKAHEAD_HOURS: i64 = 48;

/// Number of calendar days in the daily mix, today included.
const N_DAYS: u64 = 3;

/// Fetches the generation mix once per call and runs the analytics on it.
#[derive(Builder)]
pub struct Planner<'a> {
    source: &'a dyn IntervalSource,

    #[builder(default)]
    clean_fuels: CleanFuels,

    #[builder(default)]
    resolution: Resolution,
}

impl Planner<'_> {
    /// Average generation mix of today and the two following UTC days.
    #[instrument(skip_all, fields(now = %now))]
    pub async fn three_days_mix(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Vec<DailyEnergyMix>, AnalysisError> {
        let intervals = self.fetch(daily_range(now)).await?;
        let days = aggregate_by_day(&intervals, &self.clean_fuels);
        info!(n_days = days.len(), "aggregated");
        Ok(days)
    }

    /// The `duration_hours`-long window with the highest clean-energy share within the next 48 hours.
    #[instrument(skip_all, fields(now = %now, duration_hours = duration_hours))]
    pub async fn optimal_charging_window(
        &self,
        now: DateTime<Utc>,
        duration_hours: u32,
    ) -> Result<ChargingWindow, AnalysisError> {
        let window_size = self.resolution.window_size(duration_hours)?;
        let intervals = self.fetch(lookahead_range(now)).await?;
        let window = find_optimal_window(&intervals, window_size, &self.clean_fuels)
            .inspect_err(|error| warn!("optimization failed: {error}"))?;
        info!(
            start = %window.start,
            end = %window.end,
            average_clean_percentage = window.average_clean_percentage,
            "found the optimal window",
        );
        Ok(window)
    }

    async fn fetch(&self, range: Interval) -> Result<Vec<GenerationInterval>, AnalysisError> {
        info!(?range, "fetching…");
        let intervals = self.source.fetch_intervals(range).await.map_err(|error| {
            error!("failed to fetch the generation mix: {error:#}");
            AnalysisError::upstream(error)
        })?;
        info!(n_intervals = intervals.len(), "fetched");
        Ok(intervals)
    }
}

/// From 00:01 today until the end of the day after tomorrow, UTC.
fn daily_range(now: DateTime<Utc>) -> Interval {
    let today = now.date_naive();
    let start = today.and_time(NaiveTime::default()).and_utc() + TimeDelta::minutes(1);
    let end = (today + Days::new(N_DAYS)).and_time(NaiveTime::default()).and_utc();
    Interval::new(start, end)
}

fn lookahead_range(now: DateTime<Utc>) -> Interval {
    Interval::starting_at(now, TimeDelta::hours(LOOKAHEAD_HOURS))
}
