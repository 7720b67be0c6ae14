//! Partitions normalized records into dense per-day counts.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::record::BookingRecord;
use crate::domain::series::{DailySeries, DayBucket};
use crate::domain::window::DateWindow;

pub struct BucketService;

impl BucketService {
    /// Emits one bucket per window day, zero-count days included. Records
    /// outside the window are excluded, not an error. Runs in
    /// O(records + day_count).
    pub fn bucket_daily(records: &[BookingRecord], window: &DateWindow) -> DailySeries {
        let mut per_day: HashMap<NaiveDate, u64> = HashMap::new();
        for record in records {
            if window.contains_instant(record.created_at) {
                *per_day.entry(record.day()).or_insert(0) += 1;
            }
        }
        let buckets = window
            .days()
            .map(|date| DayBucket {
                date,
                count: per_day.get(&date).copied().unwrap_or(0),
            })
            .collect();
        DailySeries::from_buckets(buckets)
    }
}
