use chrono::NaiveDate;
use thiserror::Error;

/// Error type for direct misuse of engine constructors.
///
/// Data-quality problems (unparsable records, inverted user boundaries) are
/// never errors; they degrade to drops and fallbacks inside the services.
#[derive(Debug, Error)]
pub enum TrendError {
    #[error("window end {end} precedes start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}
