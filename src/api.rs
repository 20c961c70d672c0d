//! HTTP API for the payroll engine.
//!
//! This module exposes the report builders over a minimal JSON API using the
//! [`axum`](https://crates.io/crates/axum) framework.  Clients POST one
//! record-store snapshot together with a reporting interval and receive the
//! composed rows back.  The engine holds no state between requests; every
//! report is recomputed from the submitted snapshot.

use anyhow::Result;
use axum::{routing::post, Json, Router};
use serde::Deserialize;

use crate::engine::{build_payroll_report, build_performance_report};
use crate::models::{DateInterval, PayrollReport, PerformanceReport, RecordSnapshot};

/// Request body shared by both report endpoints.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub snapshot: RecordSnapshot,
    pub interval: DateInterval,
}

/// Builds the API router.
pub fn build_router() -> Router {
    Router::new()
        .route("/api/payroll", post(payroll_handler))
        .route("/api/performance", post(performance_handler))
}

/// Handler for POST /api/payroll
async fn payroll_handler(Json(request): Json<ReportRequest>) -> Json<PayrollReport> {
    tracing::info!(
        users = request.snapshot.users.len(),
        time_records = request.snapshot.time_records.len(),
        "building payroll report"
    );
    Json(build_payroll_report(&request.snapshot, request.interval))
}

/// Handler for POST /api/performance
async fn performance_handler(Json(request): Json<ReportRequest>) -> Json<PerformanceReport> {
    tracing::info!(
        users = request.snapshot.users.len(),
        time_records = request.snapshot.time_records.len(),
        "building performance report"
    );
    Json(build_performance_report(&request.snapshot, request.interval))
}

/// Launch the API server on `addr` and block until it terminates.
pub async fn serve(addr: &str) -> Result<()> {
    let router = build_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
