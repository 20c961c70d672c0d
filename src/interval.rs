//! Reporting-interval normalization and filtering.
//!
//! A [`DateInterval`] names two calendar days; filtering treats it as the
//! closed instant range from 00:00:00.000 on the start day to 23:59:59.999 on
//! the end day.  The filter is pure and keeps input order, so repeated report
//! runs over the same snapshot produce identical output.

use chrono::{DateTime, NaiveTime, Utc};

use crate::models::DateInterval;

/// Widens a calendar-day interval to its inclusive instant bounds.
pub fn interval_bounds(interval: &DateInterval) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = interval.start.and_time(NaiveTime::MIN).and_utc();
    let end_of_day =
        NaiveTime::from_hms_milli_opt(23, 59, 59, 999).expect("23:59:59.999 is a valid time");
    let end = interval.end.and_time(end_of_day).and_utc();
    (start, end)
}

/// Returns the records whose primary timestamp falls inside `interval`,
/// bounds inclusive, preserving input order.
///
/// `timestamp` extracts the record's primary timestamp; a record without one
/// (a malformed document that survived loading) is skipped with a log line
/// rather than aborting the report.  An interval whose start lies after its
/// end matches nothing.
pub fn filter_by_interval<'a, T, F>(
    records: &'a [T],
    timestamp: F,
    interval: &DateInterval,
) -> Vec<&'a T>
where
    F: Fn(&T) -> Option<DateTime<Utc>>,
{
    let (start, end) = interval_bounds(interval);
    records
        .iter()
        .filter(|record| match timestamp(record) {
            Some(t) => start <= t && t <= end,
            None => {
                tracing::warn!("skipping record without a usable timestamp");
                false
            }
        })
        .collect()
}
