use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::format;

/// Growth figures and direction flags derived from a daily series.
///
/// The count magnitude is the overall daily average while the direction
/// compares the first and second half of the series; the two answer
/// different questions (typical daily volume vs. whether the second half
/// outperforms the first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendResult {
    pub growth_count: i64,
    pub growth_count_increasing: bool,
    pub growth_percent: f64,
    pub growth_percent_increasing: bool,
}

impl TrendResult {
    /// The zero-state: no volume, flat, non-decreasing.
    pub fn flat() -> Self {
        Self {
            growth_count: 0,
            growth_count_increasing: true,
            growth_percent: 0.0,
            growth_percent_increasing: true,
        }
    }
}

impl Default for TrendResult {
    fn default() -> Self {
        Self::flat()
    }
}

/// The engine output consumed by the presentation layer.
///
/// `avg_growth_percent_text` is pre-formatted (one decimal, `%` suffix);
/// the display format is part of the contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendSummary {
    pub yesterday_count: u64,
    pub yesterday_label: String,
    pub avg_growth_count: i64,
    pub avg_growth_percent_text: String,
    pub growth_count_increasing: bool,
    pub growth_percent_increasing: bool,
    pub filtered_total_count: u64,
    pub new_today: u64,
}

/// Server-computed seed figures, shown before the first local recomputation.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SeedSummary {
    #[serde(default)]
    pub yesterday_count: u64,
    #[serde(default)]
    pub growth_count: i64,
    #[serde(default)]
    pub growth_percent: f64,
}

impl SeedSummary {
    /// Expands the seed into a displayable summary for `now`. Counts the
    /// server did not provide stay at zero until the first recomputation.
    pub fn into_summary(self, now: NaiveDateTime) -> TrendSummary {
        let yesterday = now.date() - Duration::days(1);
        TrendSummary {
            yesterday_count: self.yesterday_count,
            yesterday_label: format::short_date_label(yesterday),
            avg_growth_count: self.growth_count,
            avg_growth_percent_text: format::format_percent(self.growth_percent.min(100.0)),
            growth_count_increasing: self.growth_count >= 0,
            growth_percent_increasing: self.growth_percent >= 0.0,
            filtered_total_count: 0,
            new_today: 0,
        }
    }
}

/// Raw user-selected window boundaries, either side optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WindowBounds {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl WindowBounds {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Parses optional ISO calendar date strings (`YYYY-MM-DD`).
    ///
    /// A string that fails to parse is treated as absent; the window
    /// resolver then applies its default rules.
    pub fn from_strings(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.and_then(parse_boundary),
            end: end.and_then(parse_boundary),
        }
    }
}

fn parse_boundary(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            tracing::debug!(raw, "ignoring unparsable window boundary");
            None
        }
    }
}
