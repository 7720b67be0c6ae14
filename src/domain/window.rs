use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::TrendError;

/// Inclusive, day-aligned date window.
///
/// `start` and `end` name the first and last calendar day; the instant bounds
/// run from local midnight of `start` through 23:59:59.999 of `end`. The
/// invariant `start <= end` holds for every window the resolver produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TrendError> {
        if start > end {
            return Err(TrendError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of calendar days spanned, inclusive of both ends. Always >= 1.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Local midnight of the first day.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// 23:59:59.999 of the last day.
    pub fn end_instant(&self) -> NaiveDateTime {
        self.end.and_hms_milli_opt(23, 59, 59, 999).unwrap()
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    pub fn contains_instant(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start_instant() && instant <= self.end_instant()
    }

    /// Every day in the window, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.day_count()).map(move |offset| start + Duration::days(offset))
    }
}
