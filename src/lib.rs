//! Payroll engine library crate.
//!
//! Turns read-only record-store snapshots (employees, clock-in/out records,
//! rewards, HR queries) into per-employee attendance metrics, financial
//! summaries and payroll/performance report rows for a reporting interval.
//! The core is pure and synchronous; embed it directly via
//! [`engine::build_payroll_report`], or surface it over HTTP via
//! [`api::build_router`].

pub mod api;
pub mod attendance;
pub mod engine;
pub mod financials;
pub mod interval;
pub mod models;
pub mod schedule;
pub mod store;
