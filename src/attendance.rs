//! Attendance metrics calculator.
//!
//! Derives lateness, punctuality, overtime and total worked duration for one
//! employee from time records that have already been filtered to the
//! reporting interval and to that employee.  All time arithmetic happens in
//! milliseconds; hours and minutes appear only in the returned metrics.
//!
//! Per record, lateness and overtime are mutually exclusive against the same
//! boundary: a record on a scheduled working day is checked for lateness and
//! then for time past the scheduled clock-out, while a record on an off day
//! counts wholly as overtime and is never late.  Clocking in before the
//! scheduled start on a working day earns no overtime; only time past the
//! scheduled clock-out does.

use chrono::Datelike;

use crate::models::{AttendanceMetrics, TimeRecord, User};
use crate::schedule;

const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_MINUTE: i64 = 60_000;

/// Computes attendance metrics for `employee` over its interval-filtered
/// `records`.
///
/// Missing schedule configuration never fails the computation: without a
/// default clock-in time nothing is ever late or on time, and without a
/// default clock-out time a working day accrues no overtime.
pub fn compute_attendance(employee: &User, records: &[&TimeRecord]) -> AttendanceMetrics {
    let scheduled_in = employee.scheduled_clock_in();
    let scheduled_out = employee.scheduled_clock_out();

    let mut metrics = AttendanceMetrics::default();
    let mut lateness_ms: i64 = 0;
    let mut overtime_ms: i64 = 0;
    let mut duration_ms: i64 = 0;

    for record in records {
        let worked_ms = record
            .clock_out_time
            .map(|out| schedule::clamped_duration_ms(record.clock_in_time, out))
            .unwrap_or(0);
        duration_ms += worked_ms;

        // A completed shift is one the employee clocked out of.
        if record.clock_out_time.is_some() {
            metrics.days_worked += 1;
        }

        if employee.works_on(record.clock_in_time.weekday()) {
            if let Some(expected_in) = scheduled_in {
                let expected = schedule::on_same_day(record.clock_in_time, expected_in);
                if record.clock_in_time > expected {
                    metrics.days_late += 1;
                    lateness_ms += (record.clock_in_time - expected).num_milliseconds();
                } else {
                    metrics.on_time_arrivals += 1;
                }
            }
            if let (Some(out), Some(expected_out)) = (record.clock_out_time, scheduled_out) {
                // An inverted record is zero-duration; it earns nothing past
                // the scheduled clock-out either.
                if out >= record.clock_in_time {
                    let expected = schedule::on_same_day(record.clock_in_time, expected_out);
                    overtime_ms += schedule::excess_over(out, expected).num_milliseconds();
                }
            }
        } else {
            // Off-day work is overtime in its entirety.
            overtime_ms += worked_ms;
        }
    }

    metrics.total_lateness_minutes = lateness_ms / MS_PER_MINUTE;
    metrics.overtime_hours = overtime_ms as f64 / MS_PER_HOUR;
    metrics.total_duration_hours = duration_ms as f64 / MS_PER_HOUR;
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeRecordStatus;
    use chrono::{DateTime, Utc, Weekday};
    use std::collections::HashSet;

    fn employee(clock_in: Option<&str>, clock_out: Option<&str>, days: &[Weekday]) -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            role: "cashier".to_string(),
            default_clock_in_time: clock_in.map(str::to_string),
            default_clock_out_time: clock_out.map(str::to_string),
            working_days: Some(days.iter().copied().collect::<HashSet<_>>()),
            monthly_working_days: Some(20),
            remuneration: Some(1600.0),
        }
    }

    fn record(clock_in: &str, clock_out: Option<&str>) -> TimeRecord {
        TimeRecord {
            id: "t1".to_string(),
            user_id: "u1".to_string(),
            clock_in_time: clock_in.parse::<DateTime<Utc>>().unwrap(),
            clock_out_time: clock_out.map(|s| s.parse::<DateTime<Utc>>().unwrap()),
            status: TimeRecordStatus::ClockedOut,
        }
    }

    fn compute(employee: &User, records: &[TimeRecord]) -> AttendanceMetrics {
        let refs: Vec<&TimeRecord> = records.iter().collect();
        compute_attendance(employee, &refs)
    }

    // 2025-03-03 is a Monday.

    #[test]
    fn late_arrival_on_a_working_day() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-03T09:15:00Z", Some("2025-03-03T17:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.days_late, 1);
        assert_eq!(metrics.total_lateness_minutes, 15);
        assert_eq!(metrics.on_time_arrivals, 0);
        assert_eq!(metrics.days_worked, 1);
    }

    #[test]
    fn punctual_arrival_counts_as_on_time() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-03T08:55:00Z", Some("2025-03-03T17:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.days_late, 0);
        assert_eq!(metrics.on_time_arrivals, 1);
        assert_eq!(metrics.total_lateness_minutes, 0);
    }

    #[test]
    fn arrival_exactly_on_schedule_is_on_time() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-03T09:00:00Z", Some("2025-03-03T17:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.on_time_arrivals, 1);
        assert_eq!(metrics.days_late, 0);
    }

    #[test]
    fn lateness_accumulates_in_milliseconds_before_rounding() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [
            record("2025-03-03T09:15:30Z", Some("2025-03-03T17:00:00Z")),
            record("2025-03-03T09:14:30Z", Some("2025-03-03T17:00:00Z")),
        ];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.days_late, 2);
        // 15m30s + 14m30s is exactly 30 minutes; per-record truncation would
        // have read 29.
        assert_eq!(metrics.total_lateness_minutes, 30);
    }

    #[test]
    fn off_day_work_is_pure_overtime() {
        // Sunday shift for a Monday-only schedule.
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-02T10:00:00Z", Some("2025-03-02T14:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.overtime_hours, 4.0);
        assert_eq!(metrics.days_late, 0);
        assert_eq!(metrics.total_lateness_minutes, 0);
        assert_eq!(metrics.on_time_arrivals, 0);
        assert_eq!(metrics.total_duration_hours, 4.0);
    }

    #[test]
    fn working_day_overtime_counts_past_scheduled_clock_out_only() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-03T09:00:00Z", Some("2025-03-03T19:30:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.overtime_hours, 2.5);
        assert_eq!(metrics.total_duration_hours, 10.5);
    }

    #[test]
    fn early_arrival_earns_no_overtime() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-03T07:00:00Z", Some("2025-03-03T17:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.overtime_hours, 0.0);
        assert_eq!(metrics.on_time_arrivals, 1);
    }

    #[test]
    fn open_record_contributes_nothing_but_lateness() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-03T09:30:00Z", None)];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.days_worked, 0);
        assert_eq!(metrics.total_duration_hours, 0.0);
        assert_eq!(metrics.overtime_hours, 0.0);
        assert_eq!(metrics.days_late, 1);
        assert_eq!(metrics.total_lateness_minutes, 30);
    }

    #[test]
    fn inverted_record_clamps_to_zero() {
        // Clock-out before clock-in on an off day; the clamped duration also
        // drives overtime, so both must read zero.
        let user = employee(Some("09:00"), Some("17:00"), &[]);
        let records = [record("2025-03-03T17:00:00Z", Some("2025-03-03T09:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.total_duration_hours, 0.0);
        assert_eq!(metrics.overtime_hours, 0.0);
        assert_eq!(metrics.days_worked, 1);
    }

    #[test]
    fn inverted_record_on_a_working_day_accrues_no_overtime() {
        // The clock-out precedes the clock-in on a scheduled Monday and sits
        // past the scheduled clock-out; neither duration nor overtime may
        // pick it up.
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-03T19:00:00Z", Some("2025-03-03T18:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.overtime_hours, 0.0);
        assert_eq!(metrics.total_duration_hours, 0.0);
        assert_eq!(metrics.days_worked, 1);
    }

    #[test]
    fn missing_clock_in_schedule_suppresses_lateness() {
        let user = employee(None, Some("17:00"), &[Weekday::Mon]);
        let records = [record("2025-03-03T11:00:00Z", Some("2025-03-03T18:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.days_late, 0);
        assert_eq!(metrics.on_time_arrivals, 0);
        // Overtime past the scheduled clock-out still applies.
        assert_eq!(metrics.overtime_hours, 1.0);
    }

    #[test]
    fn missing_clock_out_schedule_suppresses_working_day_overtime() {
        let user = employee(Some("09:00"), None, &[Weekday::Mon]);
        let records = [record("2025-03-03T09:00:00Z", Some("2025-03-03T20:00:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.overtime_hours, 0.0);
        assert_eq!(metrics.total_duration_hours, 11.0);
    }

    #[test]
    fn no_working_day_set_means_every_shift_is_off_day() {
        let mut user = employee(Some("09:00"), Some("17:00"), &[]);
        user.working_days = None;
        let records = [record("2025-03-03T09:30:00Z", Some("2025-03-03T13:30:00Z"))];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.overtime_hours, 4.0);
        assert_eq!(metrics.days_late, 0);
    }

    #[test]
    fn metrics_accumulate_across_records() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon, Weekday::Tue]);
        let records = [
            record("2025-03-03T09:10:00Z", Some("2025-03-03T17:00:00Z")),
            record("2025-03-04T08:50:00Z", Some("2025-03-04T18:00:00Z")),
            record("2025-03-08T12:00:00Z", Some("2025-03-08T14:00:00Z")),
        ];
        let metrics = compute(&user, &records);
        assert_eq!(metrics.days_worked, 3);
        assert_eq!(metrics.days_late, 1);
        assert_eq!(metrics.total_lateness_minutes, 10);
        assert_eq!(metrics.on_time_arrivals, 1);
        // One hour past schedule on Tuesday plus the two-hour Saturday shift.
        assert_eq!(metrics.overtime_hours, 3.0);
    }

    #[test]
    fn empty_input_yields_default_metrics() {
        let user = employee(Some("09:00"), Some("17:00"), &[Weekday::Mon]);
        assert_eq!(compute(&user, &[]), AttendanceMetrics::default());
    }
}
