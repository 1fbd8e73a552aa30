//! Time utilities: parsing HH:MM into a ClockTime, countdown formatting.

use crate::errors::{AppError, AppResult};
use crate::models::ClockTime;

/// Parse a "HH:MM" string into a validated ClockTime.
/// Out-of-range components ("25:00") are rejected the same way malformed
/// strings are.
pub fn parse_clock(s: &str) -> AppResult<ClockTime> {
    let (h, m) = s
        .split_once(':')
        .ok_or_else(|| AppError::InvalidInput(format!("expected HH:MM, got '{}'", s)))?;

    let hour: u32 = h
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("expected HH:MM, got '{}'", s)))?;
    let minute: u32 = m
        .parse()
        .map_err(|_| AppError::InvalidInput(format!("expected HH:MM, got '{}'", s)))?;

    ClockTime::new(hour, minute)
}

/// Countdown from `now` to `target_hour:00` the same day, formatted as
/// "{h}h {m}m", or just "{m}m" when under an hour.
///
/// Callers only pass targets strictly ahead of `now` (guaranteed by the
/// next-window branch table), so no day wraparound is needed here.
pub fn time_until(target_hour: u32, now: ClockTime) -> String {
    let diff = (target_hour * 60) as i64 - now.minutes_of_day() as i64;

    let hours = diff / 60;
    let minutes = diff % 60;

    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
