//! Report composition engine.
//!
//! The `engine` module turns one [`RecordSnapshot`] and one [`DateInterval`]
//! into the payroll table and performance dashboard rows.  It uses the
//! [`rayon`] crate to parallelise per-employee composition across CPU cores;
//! employees share no mutable state, so each row is independent.  Reports are
//! pure views over the snapshot and are recomputed from scratch for every
//! request, never cached.

use rayon::prelude::*;

use crate::attendance::compute_attendance;
use crate::financials::compute_financials;
use crate::interval::filter_by_interval;
use crate::models::{
    DateInterval, HrQuery, PayrollReport, PayrollRow, PerformanceReport, PerformanceRow,
    RecordSnapshot, Reward, TimeRecord, User,
};
use crate::schedule;

const MINUTES_PER_HOUR: f64 = 60.0;

/// Composes one payroll row for `employee` from the whole-tenant collections.
///
/// Filtering to the interval and to the employee happens here; the attendance
/// and financial calculators receive only the matching records.  Every
/// division is guarded so the row never carries a non-finite number.
pub fn compute_payroll_row(
    employee: &User,
    time_records: &[TimeRecord],
    rewards: &[Reward],
    queries: &[HrQuery],
    interval: &DateInterval,
) -> PayrollRow {
    let records = records_for(employee, time_records, interval);
    let rewards = rewards_for(employee, rewards, interval);
    let queries = queries_for(employee, queries, interval);

    let attendance = compute_attendance(employee, &records);
    let financials = compute_financials(&rewards, &queries);

    let expected_daily_minutes =
        match (employee.scheduled_clock_in(), employee.scheduled_clock_out()) {
            (Some(clock_in), Some(clock_out)) => {
                schedule::expected_daily_minutes(clock_in, clock_out)
            }
            _ => 0,
        };
    let monthly_days = f64::from(employee.monthly_working_days.unwrap_or(0));
    let expected_monthly_hours = expected_daily_minutes as f64 / MINUTES_PER_HOUR * monthly_days;

    let remuneration = employee.remuneration.unwrap_or(0.0);
    let remuneration_per_day = guarded_div(remuneration, monthly_days);
    let remuneration_per_hour = guarded_div(remuneration, expected_monthly_hours);

    // Salary follows the hours actually worked, so undertime and overtime
    // both flow through total_duration_hours.
    let salary_amount = remuneration_per_hour * attendance.total_duration_hours;
    let net_salary = salary_amount - financials.query_amount + financials.reward_amount;

    PayrollRow {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        role: employee.role.clone(),
        attendance,
        financials,
        remuneration_per_day,
        remuneration_per_hour,
        expected_monthly_hours,
        salary_amount,
        net_salary,
    }
}

/// Composes one performance dashboard row for `employee`.
pub fn compute_performance_row(
    employee: &User,
    time_records: &[TimeRecord],
    rewards: &[Reward],
    queries: &[HrQuery],
    interval: &DateInterval,
) -> PerformanceRow {
    let records = records_for(employee, time_records, interval);
    let rewards = rewards_for(employee, rewards, interval);
    let queries = queries_for(employee, queries, interval);

    let attendance = compute_attendance(employee, &records);
    let financials = compute_financials(&rewards, &queries);
    let punctuality_rate = guarded_div(
        f64::from(attendance.on_time_arrivals),
        f64::from(attendance.days_worked),
    );

    PerformanceRow {
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        role: employee.role.clone(),
        attendance,
        punctuality_rate,
        reward_count: financials.reward_count,
        query_count: financials.query_count,
        net_impact: financials.net_impact,
    }
}

/// Builds the payroll report, one row per employee in snapshot order.
pub fn build_payroll_report(snapshot: &RecordSnapshot, interval: DateInterval) -> PayrollReport {
    let rows: Vec<PayrollRow> = snapshot
        .users
        .par_iter()
        .map(|employee| {
            compute_payroll_row(
                employee,
                &snapshot.time_records,
                &snapshot.rewards,
                &snapshot.queries,
                &interval,
            )
        })
        .collect();
    PayrollReport { interval, rows }
}

/// Builds the performance report, one row per employee in snapshot order.
pub fn build_performance_report(
    snapshot: &RecordSnapshot,
    interval: DateInterval,
) -> PerformanceReport {
    let rows: Vec<PerformanceRow> = snapshot
        .users
        .par_iter()
        .map(|employee| {
            compute_performance_row(
                employee,
                &snapshot.time_records,
                &snapshot.rewards,
                &snapshot.queries,
                &interval,
            )
        })
        .collect();
    PerformanceReport { interval, rows }
}

fn records_for<'a>(
    employee: &User,
    time_records: &'a [TimeRecord],
    interval: &DateInterval,
) -> Vec<&'a TimeRecord> {
    filter_by_interval(time_records, |r| Some(r.clock_in_time), interval)
        .into_iter()
        .filter(|r| r.user_id == employee.id)
        .collect()
}

fn rewards_for<'a>(
    employee: &User,
    rewards: &'a [Reward],
    interval: &DateInterval,
) -> Vec<&'a Reward> {
    filter_by_interval(rewards, |r| Some(r.created_at), interval)
        .into_iter()
        .filter(|r| r.assignee_id == employee.id)
        .collect()
}

fn queries_for<'a>(
    employee: &User,
    queries: &'a [HrQuery],
    interval: &DateInterval,
) -> Vec<&'a HrQuery> {
    filter_by_interval(queries, |q| Some(q.created_at), interval)
        .into_iter()
        .filter(|q| q.assignee_id == employee.id)
        .collect()
}

/// Division that reads 0 for an empty or degenerate denominator.  Report
/// consumers must never see NaN or an infinity.
fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        let value = numerator / denominator;
        if value.is_finite() {
            value
        } else {
            0.0
        }
    } else {
        0.0
    }
}
