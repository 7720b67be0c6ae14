//! Assembles the dashboard summary from raw records and window boundaries.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde_json::Value;

use crate::core::services::{BucketService, NormalizerService, TrendService, WindowService};
use crate::domain::record::BookingRecord;
use crate::domain::summary::{TrendSummary, WindowBounds};
use crate::format;
use crate::time::Clock;

pub struct SummaryService;

impl SummaryService {
    /// Runs the full pipeline over a raw backend batch.
    ///
    /// Pure in all inputs including `now`; identical inputs produce an
    /// identical summary. Never panics and never emits NaN.
    pub fn assemble(raw: &[Value], bounds: &WindowBounds, now: NaiveDateTime) -> TrendSummary {
        let records = NormalizerService::normalize(raw);
        Self::assemble_normalized(&records, bounds, now)
    }

    /// The same pipeline for callers that already hold normalized records.
    pub fn assemble_normalized(
        records: &[BookingRecord],
        bounds: &WindowBounds,
        now: NaiveDateTime,
    ) -> TrendSummary {
        let window = WindowService::resolve(bounds, now);
        let series = BucketService::bucket_daily(records, &window);
        let trend = TrendService::calculate(&series);
        let yesterday = now.date() - Duration::days(1);

        TrendSummary {
            yesterday_count: Self::yesterday_count(records, now),
            yesterday_label: format::short_date_label(yesterday),
            avg_growth_count: trend.growth_count,
            avg_growth_percent_text: format::format_percent(trend.growth_percent),
            growth_count_increasing: trend.growth_count_increasing,
            growth_percent_increasing: trend.growth_percent_increasing,
            filtered_total_count: series.total(),
            new_today: Self::new_today(records, now),
        }
    }

    /// Entry point for callers holding a clock rather than an instant.
    pub fn assemble_with_clock(
        raw: &[Value],
        bounds: &WindowBounds,
        clock: &dyn Clock,
    ) -> TrendSummary {
        Self::assemble(raw, bounds, clock.now())
    }

    /// Records created during the calendar day preceding `now`. Always
    /// relative to now, never to the active window.
    pub fn yesterday_count(records: &[BookingRecord], now: NaiveDateTime) -> u64 {
        Self::count_on_day(records, now.date() - Duration::days(1))
    }

    /// Records created during the calendar day of `now`.
    pub fn new_today(records: &[BookingRecord], now: NaiveDateTime) -> u64 {
        Self::count_on_day(records, now.date())
    }

    fn count_on_day(records: &[BookingRecord], day: NaiveDate) -> u64 {
        records.iter().filter(|record| record.day() == day).count() as u64
    }
}
