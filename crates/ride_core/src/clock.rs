//! Wall-clock abstraction so sessions can run with deterministic time.

use chrono::{Local, NaiveDateTime};

/// Timestamp format used for the banner, login time, and ride log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait Clock: Send {
    fn now(&self) -> NaiveDateTime;

    /// Current time rendered with [TIMESTAMP_FORMAT].
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// The process-local wall clock.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock frozen at a single instant, for reproducible runs and tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Parse a `YYYY-MM-DD HH:MM:SS` string into a fixed clock.
    pub fn parse(value: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
