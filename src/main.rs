//! Entry point for the payroll engine binary.
//!
//! Starts the HTTP surface around the report engine.  The bind address may be
//! set via the `PAYROLL_BIND_ADDR` environment variable and defaults to
//! `127.0.0.1:3000`.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "payroll_engine=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr =
        std::env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    payroll_engine::api::serve(&addr).await
}
