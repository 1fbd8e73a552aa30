//! Validated wall-clock value used as the resolver input.
//! "Now" is always passed in explicitly; the resolver never reads the
//! system clock itself.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::Serialize;
use std::fmt;

/// Hour/minute pair, validated at construction.
/// Hour must be in 0..=23 and minute in 0..=59; out-of-range values are
/// rejected with `AppError::InvalidInput` so the resolver stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32) -> AppResult<Self> {
        if hour > 23 {
            return Err(AppError::InvalidInput(format!(
                "hour {} out of range (0-23)",
                hour
            )));
        }
        if minute > 59 {
            return Err(AppError::InvalidInput(format!(
                "minute {} out of range (0-59)",
                minute
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Chrono times are already range-checked, so this cannot fail.
    pub fn from_naive(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }

    /// Current local wall-clock time. Kept out of the resolver core: only
    /// the CLI boundary calls this.
    pub fn now_local() -> Self {
        Self::from_naive(chrono::Local::now().time())
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
