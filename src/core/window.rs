use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    core::{classifier::CleanFuels, error::AnalysisError, generation::GenerationInterval},
    prelude::*,
};

/// Contiguous run of intervals with the highest average clean-energy share.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub average_clean_percentage: f64,
}

/// Running sums of every `size`-long window over `scores`, paired with the window start index.
///
/// The first sum is computed directly, each next one by subtracting the leaving score
/// and adding the entering one.
pub struct SlidingSums<'a> {
    scores: &'a [f64],
    size: usize,
    start: usize,
    sum: f64,
}

impl<'a> SlidingSums<'a> {
    /// Requires `1 <= size <= scores.len()`.
    pub fn new(scores: &'a [f64], size: usize) -> Result<Self, AnalysisError> {
        if size == 0 {
            return Err(AnalysisError::InvalidWindowSize);
        }
        if scores.len() < size {
            return Err(AnalysisError::NoFeasibleWindow {
                window_size: size,
                n_intervals: scores.len(),
            });
        }
        Ok(Self { scores, size, start: 0, sum: scores[..size].iter().sum() })
    }
}

impl Iterator for SlidingSums<'_> {
    type Item = (usize, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let end = self.start + self.size;
        if end > self.scores.len() {
            return None;
        }
        if self.start != 0 {
            self.sum = self.sum - self.scores[self.start - 1] + self.scores[end - 1];
        }
        let item = (self.start, self.sum);
        self.start += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.scores.len() + 1).saturating_sub(self.start + self.size);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SlidingSums<'_> {}

/// Find the `window_size`-long run of intervals with the highest total clean score.
///
/// Only a strictly better sum replaces the best window, so the earliest one wins a tie.
/// Running sums within rounding distance of the best are settled by summing both windows directly.
pub fn find_optimal_window(
    intervals: &[GenerationInterval],
    window_size: usize,
    clean_fuels: &CleanFuels,
) -> Result<ChargingWindow, AnalysisError> {
    let scores: Vec<f64> =
        intervals.iter().map(|interval| interval.clean_score(clean_fuels)).collect();
    let direct_sum = |start: usize| -> f64 { scores[start..start + window_size].iter().sum() };

    let best = SlidingSums::new(&scores, window_size)?.reduce(|best, candidate| {
        let difference = candidate.1 - best.1;
        if difference.abs() <= rounding_tolerance(best.1, window_size) {
            if direct_sum(candidate.0) > direct_sum(best.0) { candidate } else { best }
        } else if difference > 0.0 {
            candidate
        } else {
            best
        }
    });
    // `SlidingSums::new` has rejected the empty case, so there is always a window here.
    let Some((best_start, _)) = best else {
        return Err(AnalysisError::NoFeasibleWindow { window_size, n_intervals: intervals.len() });
    };
    let best_sum = direct_sum(best_start);
    debug!(best_start, best_sum, "found the best window");

    #[expect(clippy::cast_precision_loss)]
    let average_clean_percentage = best_sum / window_size as f64;
    Ok(ChargingWindow {
        start: intervals[best_start].interval.start,
        end: intervals[best_start + window_size - 1].interval.end,
        average_clean_percentage,
    })
}

/// Upper bound of the error a running sum accumulates against the direct one.
#[expect(clippy::cast_precision_loss)]
fn rounding_tolerance(sum: f64, window_size: usize) -> f64 {
    1e-9 * window_size as f64 * sum.abs().max(1.0)
}
