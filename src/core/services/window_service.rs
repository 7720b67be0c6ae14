//! Resolves user-selected boundaries into a concrete date window.

use chrono::{Duration, NaiveDateTime};

use crate::domain::summary::WindowBounds;
use crate::domain::window::DateWindow;

/// Span of the default trailing window, in calendar days.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

pub struct WindowService;

impl WindowService {
    /// Resolves optional boundaries against `now` into a window that always
    /// satisfies `start <= end`.
    ///
    /// A missing end falls to the end of "today"; a missing start falls to a
    /// trailing 30-day span ending at the resolved end. An inverted pair is
    /// discarded entirely in favor of the trailing window ending now.
    pub fn resolve(bounds: &WindowBounds, now: NaiveDateTime) -> DateWindow {
        let end = bounds.end.unwrap_or_else(|| now.date());
        let start = bounds
            .start
            .unwrap_or(end - Duration::days(DEFAULT_WINDOW_DAYS - 1));

        if start > end {
            tracing::debug!(%start, %end, "inverted window boundaries, using trailing fallback");
            let end = now.date();
            let start = end - Duration::days(DEFAULT_WINDOW_DAYS - 1);
            return DateWindow { start, end };
        }
        DateWindow { start, end }
    }
}
