//! Data models for the payroll engine.
//!
//! The `models` module defines the serialisable record types delivered by the
//! hosted document store (`User`, `TimeRecord`, `Reward`, `HrQuery`) together
//! with the derived view-model types produced by the engine.  Wire names are
//! camelCase to match the store's field naming, and record statuses are closed
//! enums rather than free-form strings so call sites can match exhaustively.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::schedule;

/// An employee record as configured through team management.
///
/// Scheduling fields are optional; a missing default clock-in/out time or
/// working-day set is a configuration gap, and every metric that depends on
/// the missing field degrades to zero instead of failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Store-assigned document id.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// Free-form role label (cashier, manager, ...).
    pub role: String,
    /// Scheduled start of the working day, `HH:MM` wall-clock time.
    #[serde(default)]
    pub default_clock_in_time: Option<String>,
    /// Scheduled end of the working day, `HH:MM` wall-clock time.  May be
    /// earlier than the clock-in time for overnight shifts.
    #[serde(default)]
    pub default_clock_out_time: Option<String>,
    /// The weekdays this employee is scheduled to work.  Work on any other
    /// day counts entirely as overtime.
    #[serde(default)]
    pub working_days: Option<HashSet<Weekday>>,
    /// Number of scheduled working days per month, used to derive per-day and
    /// per-hour remuneration.
    #[serde(default)]
    pub monthly_working_days: Option<u32>,
    /// Nominal monthly salary.
    #[serde(default)]
    pub remuneration: Option<f64>,
}

impl User {
    /// Whether `day` is one of this employee's scheduled working days.
    /// An absent working-day set schedules nothing, so every day reads as an
    /// off day.
    pub fn works_on(&self, day: Weekday) -> bool {
        self.working_days
            .as_ref()
            .is_some_and(|days| days.contains(&day))
    }

    /// The scheduled clock-in time, if configured and well-formed.
    pub fn scheduled_clock_in(&self) -> Option<NaiveTime> {
        self.parse_schedule_field(self.default_clock_in_time.as_deref(), "defaultClockInTime")
    }

    /// The scheduled clock-out time, if configured and well-formed.
    pub fn scheduled_clock_out(&self) -> Option<NaiveTime> {
        self.parse_schedule_field(self.default_clock_out_time.as_deref(), "defaultClockOutTime")
    }

    fn parse_schedule_field(&self, raw: Option<&str>, field: &str) -> Option<NaiveTime> {
        let raw = raw?;
        match schedule::parse_time_of_day(raw) {
            Ok(time) => Some(time),
            Err(err) => {
                // Malformed schedule values are a configuration gap, not a
                // report failure; the dependent metrics read zero.
                tracing::warn!(user = %self.id, %field, %err, "ignoring malformed schedule time");
                None
            }
        }
    }
}

/// One clock-in/clock-out pair for an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRecord {
    pub id: String,
    /// The employee this record belongs to ([`User::id`]).
    pub user_id: String,
    pub clock_in_time: DateTime<Utc>,
    /// Absent while the employee is still clocked in.
    #[serde(default)]
    pub clock_out_time: Option<DateTime<Utc>>,
    pub status: TimeRecordStatus,
}

/// Lifecycle status of a [`TimeRecord`], using the store's literal wire
/// spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRecordStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "Clocked In")]
    ClockedIn,
    #[serde(rename = "Clocked Out")]
    ClockedOut,
    #[serde(rename = "rejected")]
    Rejected,
}

/// An HR-initiated recognition, optionally carrying a monetary bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    /// The employee being recognised ([`User::id`]).
    pub assignee_id: String,
    /// Bonus amount; absent for non-monetary recognition.
    #[serde(default)]
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub status: CaseStatus,
}

/// An HR-initiated query or fine against an employee, optionally carrying a
/// monetary deduction.  Same shape as [`Reward`] but semantically subtractive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HrQuery {
    pub id: String,
    pub assignee_id: String,
    #[serde(default)]
    pub amount: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub status: CaseStatus,
}

/// Lifecycle status shared by [`Reward`] and [`HrQuery`]: proposed, then
/// optionally closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Open,
    Closed,
}

/// A closed reporting interval over calendar days.  Both endpoints are
/// inclusive; `start` is widened to 00:00:00.000 and `end` to 23:59:59.999
/// before any filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One read-only snapshot of the tenant's record store.  The engine treats a
/// snapshot as immutable and recomputes every report from scratch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSnapshot {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub time_records: Vec<TimeRecord>,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    #[serde(default)]
    pub queries: Vec<HrQuery>,
}

/// Per-employee attendance metrics derived from the filtered time records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMetrics {
    /// Completed shifts (records with a clock-out) in the interval.
    pub days_worked: u32,
    /// Scheduled working days where the employee clocked in after the
    /// scheduled start.
    pub days_late: u32,
    /// Total lateness across the interval, whole minutes.
    pub total_lateness_minutes: i64,
    /// Scheduled working days where the employee clocked in at or before the
    /// scheduled start.
    pub on_time_arrivals: u32,
    /// Hours worked past the scheduled clock-out, plus all hours worked on
    /// off days.
    pub overtime_hours: f64,
    /// Total hours on the clock across all records in the interval.
    pub total_duration_hours: f64,
}

/// Per-employee money movements within the interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub reward_count: u32,
    pub reward_amount: f64,
    pub query_count: u32,
    pub query_amount: f64,
    /// `reward_amount - query_amount`.
    pub net_impact: f64,
}

/// One row of the payroll table: attendance, money movements and the salary
/// figures derived from the employee's configured schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollRow {
    pub employee_id: String,
    pub employee_name: String,
    pub role: String,
    pub attendance: AttendanceMetrics,
    pub financials: FinancialSummary,
    pub remuneration_per_day: f64,
    pub remuneration_per_hour: f64,
    pub expected_monthly_hours: f64,
    /// Pay for the hours actually worked in the interval.
    pub salary_amount: f64,
    /// `salary_amount - query_amount + reward_amount`.
    pub net_salary: f64,
}

/// One row of the performance dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRow {
    pub employee_id: String,
    pub employee_name: String,
    pub role: String,
    pub attendance: AttendanceMetrics,
    /// `on_time_arrivals / days_worked`, 0 when there are no completed
    /// shifts.
    pub punctuality_rate: f64,
    pub reward_count: u32,
    pub query_count: u32,
    pub net_impact: f64,
}

/// A full payroll report for one interval, one row per employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollReport {
    pub interval: DateInterval,
    pub rows: Vec<PayrollRow>,
}

/// A full performance report for one interval, one row per employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub interval: DateInterval,
    pub rows: Vec<PerformanceRow>,
}
