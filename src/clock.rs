use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current instant.
///
/// `get_time` reads the wall clock through this trait so tests can pin it.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Checks that the system clock yields a usable instant.
    ///
    /// A clock set before the UNIX epoch is treated as unavailable.
    pub fn probe(&self) -> Result<()> {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|_| ())
            .map_err(|err| Error::ClockUnavailable(err.to_string()))
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
