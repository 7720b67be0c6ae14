use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Count of records whose creation instant falls within one calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub count: u64,
}

/// Dense per-day series across a resolved window.
///
/// Entries are ordered ascending with no gaps; days with zero matching
/// records still appear. Length always equals the window's day count.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailySeries {
    buckets: Vec<DayBucket>,
}

impl DailySeries {
    pub fn from_buckets(buckets: Vec<DayBucket>) -> Self {
        Self { buckets }
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayBucket> {
        self.buckets.iter()
    }

    /// Sum of all day counts.
    pub fn total(&self) -> u64 {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }

    /// The raw count vector, ordered by day.
    pub fn counts(&self) -> Vec<u64> {
        self.buckets.iter().map(|bucket| bucket.count).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_sums_every_bucket() {
        let base = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let series = DailySeries::from_buckets(vec![
            DayBucket { date: base, count: 3 },
            DayBucket { date: base.succ_opt().unwrap(), count: 0 },
            DayBucket { date: base.succ_opt().unwrap().succ_opt().unwrap(), count: 7 },
        ]);
        assert_eq!(series.total(), 10);
        assert_eq!(series.counts(), vec![3, 0, 7]);
        assert_eq!(series.len(), 3);
    }
}
