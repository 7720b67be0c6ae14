use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A normalized booking/purchase record.
///
/// Instances are produced by the normalizer, so `created_at` always holds a
/// valid instant; raw records without one never reach this type. `amount` and
/// `status` are carried through for downstream consumers, not interpreted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingRecord {
    pub id: String,
    pub created_at: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl BookingRecord {
    pub fn new(id: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            created_at,
            amount: None,
            status: None,
        }
    }

    /// Calendar day the record belongs to.
    pub fn day(&self) -> NaiveDate {
        self.created_at.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_is_the_calendar_date_of_the_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        let record = BookingRecord::new("bk-1", instant);
        assert_eq!(record.day(), NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
    }
}
