//! Growth figures from a dense daily series.

use crate::domain::series::DailySeries;
use crate::domain::summary::TrendResult;

/// Upper bound applied to the reported growth percent. No lower bound.
const GROWTH_PERCENT_CAP: f64 = 100.0;

/// Percent assigned to a day-over-day jump from a zero baseline.
const ZERO_BASELINE_PERCENT: f64 = 100.0;

pub struct TrendService;

impl TrendService {
    /// Derives growth magnitude and direction from the series.
    ///
    /// The count magnitude is the overall daily average; the count direction
    /// compares first- and second-half averages of the series. Percent
    /// figures come from the day-over-day change sequence, with a zero
    /// baseline reported as a 100% increase.
    pub fn calculate(series: &DailySeries) -> TrendResult {
        let counts: Vec<f64> = series.counts().into_iter().map(|count| count as f64).collect();

        let growth_count = Self::average_daily_count(&counts);
        let growth_count_increasing = Self::half_split_increasing(&counts);

        let percents = Self::day_over_day_percents(&counts);
        let growth_percent = mean(&percents).min(GROWTH_PERCENT_CAP);
        let growth_percent_increasing = Self::half_split_increasing(&percents);

        TrendResult {
            growth_count,
            growth_count_increasing,
            growth_percent,
            growth_percent_increasing,
        }
    }

    /// Overall daily average, rounded to the nearest whole count.
    fn average_daily_count(counts: &[f64]) -> i64 {
        if counts.is_empty() {
            return 0;
        }
        let total: f64 = counts.iter().sum();
        (total / counts.len() as f64).round() as i64
    }

    /// Day-over-day percent changes, from the second day onward.
    fn day_over_day_percents(counts: &[f64]) -> Vec<f64> {
        counts
            .windows(2)
            .map(|pair| {
                let (prev, curr) = (pair[0], pair[1]);
                if prev == 0.0 {
                    if curr > 0.0 {
                        ZERO_BASELINE_PERCENT
                    } else {
                        0.0
                    }
                } else {
                    (curr - prev) / prev * 100.0
                }
            })
            .collect()
    }

    /// Whether the second half of `values` outperforms the first, splitting
    /// by index at `len / 2`. Vacuously true below two values.
    fn half_split_increasing(values: &[f64]) -> bool {
        if values.len() < 2 {
            return true;
        }
        let mid = values.len() / 2;
        mean(&values[mid..]) >= mean(&values[..mid])
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::series::DayBucket;
    use chrono::{Duration, NaiveDate};

    fn series_of(counts: &[u64]) -> DailySeries {
        let base = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        DailySeries::from_buckets(
            counts
                .iter()
                .enumerate()
                .map(|(offset, &count)| DayBucket {
                    date: base + Duration::days(offset as i64),
                    count,
                })
                .collect(),
        )
    }

    #[test]
    fn steady_volume_is_flat_and_non_decreasing() {
        let result = TrendService::calculate(&series_of(&[10; 10]));
        assert_eq!(result.growth_count, 10);
        assert!(result.growth_count_increasing);
        assert_eq!(result.growth_percent, 0.0);
        assert!(result.growth_percent_increasing);
    }

    #[test]
    fn zero_baseline_jump_counts_as_full_increase() {
        let result = TrendService::calculate(&series_of(&[0, 0, 0, 0, 0, 20]));
        // pcts = [0, 0, 0, 0, 100], mean 20
        assert_eq!(result.growth_percent, 20.0);
        assert!(result.growth_percent_increasing);
        assert!(result.growth_count_increasing);
    }

    #[test]
    fn linear_decline_flags_both_directions_false() {
        let counts: Vec<u64> = (0..10).map(|day| 100 - day * 10).collect();
        let result = TrendService::calculate(&series_of(&counts));
        assert!(!result.growth_count_increasing);
        assert!(!result.growth_percent_increasing);
        assert!(result.growth_percent < 0.0);
    }

    #[test]
    fn single_day_reports_average_with_vacuous_directions() {
        let result = TrendService::calculate(&series_of(&[5]));
        assert_eq!(result.growth_count, 5);
        assert!(result.growth_count_increasing);
        assert_eq!(result.growth_percent, 0.0);
        assert!(result.growth_percent_increasing);
    }

    #[test]
    fn all_zero_series_is_the_flat_zero_state() {
        let result = TrendService::calculate(&series_of(&[0; 7]));
        assert_eq!(result, TrendResult::flat());
    }

    #[test]
    fn growth_percent_is_capped_at_one_hundred() {
        let result = TrendService::calculate(&series_of(&[1, 50, 1, 80]));
        assert_eq!(result.growth_percent, 100.0);
    }

    #[test]
    fn magnitude_is_overall_average_not_half_difference() {
        // First half avg 2, second half avg 8, overall avg 5.
        let result = TrendService::calculate(&series_of(&[2, 2, 8, 8]));
        assert_eq!(result.growth_count, 5);
        assert!(result.growth_count_increasing);
    }
}
