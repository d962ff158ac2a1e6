use std::collections::BTreeMap;

use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;

use crate::core::{classifier::CleanFuels, generation::GenerationInterval};

/// Average generation mix of a single UTC calendar date.
#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyEnergyMix {
    pub date: NaiveDate,
    pub average_percentages: BTreeMap<String, f64>,
    pub clean_energy_percentage: f64,
}

/// Group the intervals by UTC date and average each fuel over the date's intervals.
///
/// The divisor is the number of intervals on the date, regardless of whether an interval
/// reports the fuel. Thus, an interval without a mix dilutes every average of its date.
pub fn aggregate_by_day(
    intervals: &[GenerationInterval],
    clean_fuels: &CleanFuels,
) -> Vec<DailyEnergyMix> {
    intervals
        .iter()
        .into_group_map_by(|interval| interval.date())
        .into_iter()
        .sorted_unstable_by_key(|(date, _)| *date)
        .map(|(date, intervals)| average_day(date, &intervals, clean_fuels))
        .collect()
}

fn average_day(
    date: NaiveDate,
    intervals: &[&GenerationInterval],
    clean_fuels: &CleanFuels,
) -> DailyEnergyMix {
    let mut totals = BTreeMap::<String, f64>::new();
    for share in intervals.iter().flat_map(|interval| &interval.generation_mix) {
        *totals.entry(share.fuel.clone()).or_default() += share.percentage;
    }

    #[expect(clippy::cast_precision_loss)]
    let n_intervals = intervals.len() as f64;
    let average_percentages: BTreeMap<String, f64> =
        totals.into_iter().map(|(fuel, total)| (fuel, total / n_intervals)).collect();
    let clean_energy_percentage = average_percentages
        .iter()
        .filter(|(fuel, _)| clean_fuels.is_clean(fuel))
        .map(|(_, average)| average)
        .sum();

    DailyEnergyMix { date, average_percentages, clean_energy_percentage }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};

    use super::*;
    use crate::{core::generation::FuelShare, ops::Interval};

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, hour, minute, 0).unwrap()
    }

    fn interval(start: DateTime<Utc>, mix: &[(&str, f64)]) -> GenerationInterval {
        GenerationInterval::new(
            Interval::starting_at(start, TimeDelta::minutes(30)),
            mix.iter().map(|(fuel, percentage)| FuelShare::new(*fuel, *percentage)).collect(),
        )
    }

    fn half_hours(day: u32) -> impl Iterator<Item = DateTime<Utc>> {
        (0..48).map(move |index| at(day, 0, 0) + TimeDelta::minutes(30 * index))
    }

    #[test]
    fn test_empty() {
        assert!(aggregate_by_day(&[], &CleanFuels::default()).is_empty());
    }

    #[test]
    fn test_two_dates() {
        let intervals = half_hours(1)
            .map(|start| interval(start, &[("wind", 50.0), ("gas", 50.0)]))
            .chain(half_hours(2).map(|start| interval(start, &[("wind", 0.0), ("gas", 100.0)])))
            .collect_vec();
        let clean_fuels = ["wind"].into_iter().collect();

        let days = aggregate_by_day(&intervals, &clean_fuels);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_abs_diff_eq!(days[0].clean_energy_percentage, 50.0);
        assert_abs_diff_eq!(days[0].average_percentages["gas"], 50.0);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 5, 2).unwrap());
        assert_abs_diff_eq!(days[1].clean_energy_percentage, 0.0);
        assert_abs_diff_eq!(days[1].average_percentages["gas"], 100.0);
    }

    #[test]
    fn test_sorted_by_date_regardless_of_input_order() {
        let intervals = [
            interval(at(3, 10, 0), &[("solar", 10.0)]),
            interval(at(1, 10, 0), &[("solar", 20.0)]),
            interval(at(2, 10, 0), &[("solar", 30.0)]),
            interval(at(1, 11, 0), &[("solar", 40.0)]),
        ];
        let days = aggregate_by_day(&intervals, &CleanFuels::default());
        let dates = days.iter().map(|day| day.date.to_string()).collect_vec();
        assert_eq!(dates, ["2024-05-01", "2024-05-02", "2024-05-03"]);
        assert_abs_diff_eq!(days[0].average_percentages["solar"], 30.0);
    }

    #[test]
    fn test_uniform_mix_is_preserved() {
        let mix = [("biomass", 5.0), ("coal", 2.5), ("gas", 40.0), ("nuclear", 17.5), ("wind", 35.0)];
        let intervals = half_hours(7).map(|start| interval(start, &mix)).collect_vec();

        let days = aggregate_by_day(&intervals, &CleanFuels::default());

        assert_eq!(days.len(), 1);
        for (fuel, percentage) in mix {
            assert_abs_diff_eq!(days[0].average_percentages[fuel], percentage, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(days[0].clean_energy_percentage, 57.5, epsilon = 1e-9);
    }

    #[test]
    fn test_divides_by_all_intervals_of_the_date() {
        // Nuclear is reported only once out of two intervals.
        let intervals = [
            interval(at(1, 0, 0), &[("nuclear", 20.0), ("gas", 80.0)]),
            interval(at(1, 0, 30), &[("gas", 100.0)]),
        ];
        let days = aggregate_by_day(&intervals, &CleanFuels::default());
        assert_abs_diff_eq!(days[0].average_percentages["nuclear"], 10.0);
        assert_abs_diff_eq!(days[0].average_percentages["gas"], 90.0);
        assert_abs_diff_eq!(days[0].clean_energy_percentage, 10.0);
    }

    #[test]
    fn test_interval_without_mix_dilutes_the_date() {
        let intervals = [interval(at(1, 0, 0), &[("wind", 60.0)]), interval(at(1, 0, 30), &[])];
        let days = aggregate_by_day(&intervals, &CleanFuels::default());
        assert_eq!(days[0].average_percentages.len(), 1);
        assert_abs_diff_eq!(days[0].average_percentages["wind"], 30.0);
        assert_abs_diff_eq!(days[0].clean_energy_percentage, 30.0);
    }

    #[test]
    fn test_fuel_keys_keep_their_case() {
        let intervals = [interval(at(1, 0, 0), &[("Wind", 10.0), ("wind", 20.0), ("GAS", 70.0)])];
        let days = aggregate_by_day(&intervals, &CleanFuels::default());
        assert_abs_diff_eq!(days[0].average_percentages["Wind"], 10.0);
        assert_abs_diff_eq!(days[0].average_percentages["wind"], 20.0);
        assert_abs_diff_eq!(days[0].clean_energy_percentage, 30.0);
    }

    #[test]
    fn test_averages_stay_within_bounds() {
        let intervals = (1..=3)
            .flat_map(half_hours)
            .enumerate()
            .map(|(index, start)| {
                #[expect(clippy::cast_precision_loss)]
                let solar = (index % 101) as f64;
                interval(start, &[("solar", solar), ("gas", 100.0 - solar)])
            })
            .collect_vec();
        let days = aggregate_by_day(&intervals, &CleanFuels::default());
        assert_eq!(days.len(), 3);
        for day in &days {
            for average in day.average_percentages.values() {
                assert!((0.0..=100.0).contains(average), "{average}");
            }
        }
    }

    #[test]
    fn test_serialization() -> anyhow::Result<()> {
        let days = aggregate_by_day(&[interval(at(1, 0, 0), &[("wind", 40.0)])], &CleanFuels::default());
        let json = serde_json::to_value(&days[0])?;
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2024-05-01",
                "averagePercentages": {"wind": 40.0},
                "cleanEnergyPercentage": 40.0,
            }),
        );
        Ok(())
    }
}
