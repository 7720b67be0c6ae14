#![doc(test(attr(deny(warnings))))]

//! Trend Core turns a batch of timestamped booking records plus optional
//! date boundaries into the summary figures a dashboard list screen shows.
//! Pure computation; no I/O, no ambient clock reads, no UI.

pub mod core;
pub mod domain;
pub mod errors;
pub mod format;
pub mod time;
pub mod utils;

pub use crate::core::services::{
    BucketService, NormalizerService, SummaryService, TrendService, WindowService,
};
pub use crate::domain::{
    BookingRecord, DailySeries, DateWindow, DayBucket, SeedSummary, TrendResult, TrendSummary,
    WindowBounds,
};
pub use crate::errors::TrendError;
pub use crate::time::{Clock, FixedClock, SystemClock};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Trend Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
