//! Display formatting shared by the summary contract.

use chrono::{Datelike, NaiveDate};

/// Formats a growth percent with exactly one decimal place and a `%` suffix.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Abbreviated month plus unpadded day, e.g. `"Jan 5"`.
pub fn short_date_label(date: NaiveDate) -> String {
    format!("{} {}", date.format("%b"), date.day())
}
