//! Wall-clock schedule helpers.
//!
//! Employee schedules are configured as `HH:MM` times of day with no date or
//! zone attached.  This module parses those values and projects them onto the
//! calendar date of an actual clock-in so they can be compared against real
//! instants.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use thiserror::Error;

/// Minutes in a full day, used to wrap overnight schedules.
const MINUTES_PER_DAY: i64 = 24 * 60;

/// A schedule field that could not be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("invalid time of day `{0}`, expected HH:MM")]
    InvalidTimeOfDay(String),
}

/// Parses a configured time of day.  Accepts `HH:MM` and `HH:MM:SS`.
pub fn parse_time_of_day(value: &str) -> Result<NaiveTime, ScheduleError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| ScheduleError::InvalidTimeOfDay(value.to_string()))
}

/// Scheduled length of one working day in minutes.
///
/// A clock-out earlier than the clock-in means the shift wraps over midnight
/// (22:00 to 06:00 is eight hours, not minus sixteen).
pub fn expected_daily_minutes(clock_in: NaiveTime, clock_out: NaiveTime) -> i64 {
    let raw = clock_out.signed_duration_since(clock_in).num_minutes();
    if raw < 0 {
        raw + MINUTES_PER_DAY
    } else {
        raw
    }
}

/// Projects a configured time of day onto the calendar date of `instant`,
/// yielding the expected clock-in or clock-out for that day.
pub fn on_same_day(instant: DateTime<Utc>, time_of_day: NaiveTime) -> DateTime<Utc> {
    instant.date_naive().and_time(time_of_day).and_utc()
}

/// Worked duration between two instants in milliseconds, clamped to zero when
/// the end precedes the start (administrative corrections can transiently
/// invert a record; a negative duration must never reach the aggregates).
pub fn clamped_duration_ms(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    end.signed_duration_since(start).num_milliseconds().max(0)
}

/// Time by which `actual` exceeds `expected`, or zero.
pub fn excess_over(actual: DateTime<Utc>, expected: DateTime<Utc>) -> Duration {
    let excess = actual.signed_duration_since(expected);
    if excess > Duration::zero() {
        excess
    } else {
        Duration::zero()
    }
}
