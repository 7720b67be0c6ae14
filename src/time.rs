use chrono::{Local, NaiveDate, NaiveDateTime};

/// Clock abstracts access to the current instant so summaries remain
/// deterministic in tests. Every service takes "now" explicitly; this trait
/// is how callers obtain it at the boundary.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock instant.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current calendar day. Defaults to `now().date()`.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Reports a fixed instant; pins "now" in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
