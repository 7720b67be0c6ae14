//! Best-effort normalization of loosely-typed backend records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;

use crate::domain::record::BookingRecord;

const INSTANT_KEYS: [&str; 4] = ["createdAt", "created_at", "updatedAt", "updated_at"];
const ID_KEYS: [&str; 4] = ["id", "_id", "orderId", "orderNo"];
const AMOUNT_KEYS: [&str; 4] = ["amount", "totalAmount", "total_amount", "price"];
const STATUS_KEYS: [&str; 2] = ["status", "state"];

/// Integer instants at or above this magnitude are epoch milliseconds.
const EPOCH_MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

/// Maps heterogeneous raw record shapes into canonical `BookingRecord`s.
pub struct NormalizerService;

impl NormalizerService {
    /// Normalizes a raw batch. Records without a parseable creation instant
    /// are dropped; malformed input never raises.
    pub fn normalize(raw: &[Value]) -> Vec<BookingRecord> {
        raw.iter()
            .enumerate()
            .filter_map(|(index, value)| Self::normalize_one(value, index))
            .collect()
    }

    fn normalize_one(value: &Value, index: usize) -> Option<BookingRecord> {
        let created_at = match Self::instant_of(value) {
            Some(instant) => instant,
            None => {
                tracing::debug!(index, "dropping record without a usable creation instant");
                return None;
            }
        };
        Some(BookingRecord {
            id: Self::id_of(value, index),
            created_at,
            amount: Self::amount_of(value),
            status: Self::status_of(value),
        })
    }

    /// The first present, parseable instant among the known aliases wins.
    fn instant_of(value: &Value) -> Option<NaiveDateTime> {
        INSTANT_KEYS
            .iter()
            .filter_map(|key| value.get(key))
            .find_map(parse_instant)
    }

    fn id_of(value: &Value, index: usize) -> String {
        ID_KEYS
            .iter()
            .filter_map(|key| value.get(key))
            .find_map(|field| match field {
                Value::String(text) if !text.is_empty() => Some(text.clone()),
                Value::Number(number) => Some(number.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| index.to_string())
    }

    fn amount_of(value: &Value) -> Option<f64> {
        AMOUNT_KEYS
            .iter()
            .filter_map(|key| value.get(key))
            .find_map(|field| match field {
                Value::Number(number) => number.as_f64(),
                Value::String(text) => text.trim().parse::<f64>().ok(),
                _ => None,
            })
            .filter(|amount| *amount >= 0.0)
    }

    fn status_of(value: &Value) -> Option<String> {
        STATUS_KEYS
            .iter()
            .filter_map(|key| value.get(key))
            .find_map(|field| field.as_str())
            .map(str::to_string)
    }
}

fn parse_instant(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(raw) => parse_instant_str(raw.trim()),
        Value::Number(number) => number.as_i64().and_then(parse_epoch),
        _ => None,
    }
}

fn parse_instant_str(raw: &str) -> Option<NaiveDateTime> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(instant) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(instant);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

fn parse_epoch(value: i64) -> Option<NaiveDateTime> {
    let (secs, nanos) = if value.abs() >= EPOCH_MILLIS_THRESHOLD {
        (
            value.div_euclid(1000),
            (value.rem_euclid(1000) as u32) * 1_000_000,
        )
    } else {
        (value, 0)
    };
    DateTime::from_timestamp(secs, nanos).map(|instant| instant.naive_utc())
}
