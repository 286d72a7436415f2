//! Health check routes
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Basic liveness check |
//! | /health/detailed | GET | Store check with collection counts |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "uptime_seconds": 42
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// Health check routes, served at the root rather than under `/api`
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

/// Basic health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    /// Version number
    version: &'static str,
    /// Uptime in seconds
    uptime_seconds: u64,
}

/// Detailed health check response
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    uptime_seconds: u64,
    /// Component check results
    checks: HealthChecks,
    /// Record counts per collection
    collections: CollectionCounts,
}

/// Component check details
#[derive(Serialize)]
pub struct HealthChecks {
    /// In-memory store check
    store: CheckResult,
}

/// Single check result
#[derive(Serialize)]
pub struct CheckResult {
    /// Status (ok | error)
    status: &'static str,
    /// Latency in milliseconds
    latency_ms: u64,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok",
            latency_ms,
        }
    }
}

/// Record counts for each store collection
#[derive(Serialize)]
pub struct CollectionCounts {
    rooms: usize,
    bookings: usize,
    housekeeping: usize,
    orders: usize,
    users: usize,
    feedback: usize,
}

// Server start time (lazily initialized)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Basic health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
    })
}

/// Detailed health check including store state
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    // Walk every collection so the latency reflects a full store sweep
    let store_start = std::time::Instant::now();
    let collections = CollectionCounts {
        rooms: state.db.rooms().len(),
        bookings: state.db.bookings().len(),
        housekeeping: state.db.tasks().len(),
        orders: state.db.orders().len(),
        users: state.db.users().len(),
        feedback: state.db.feedback().len(),
    };
    let store_check = CheckResult::ok_with_latency(store_start.elapsed().as_millis() as u64);

    Json(DetailedHealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        checks: HealthChecks { store: store_check },
        collections,
    })
}
