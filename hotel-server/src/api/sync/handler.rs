//! Sync API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use std::collections::HashMap;

use crate::core::ServerState;

/// Collections that receive version bumps on mutation
const TRACKED_RESOURCES: &[&str] = &["rooms", "bookings", "housekeeping"];

/// Per-resource version counters
#[derive(Debug, Serialize)]
pub struct VersionsResponse {
    pub versions: HashMap<String, u64>,
}

/// GET /api/sync/versions - current version per mutable resource
///
/// Versions increase monotonically on every mutation. Polling clients
/// compare against their last seen value to detect staleness without
/// refetching the collections.
pub async fn get_versions(State(state): State<ServerState>) -> Json<VersionsResponse> {
    let mut versions = HashMap::new();

    for &resource in TRACKED_RESOURCES {
        versions.insert(resource.to_string(), state.resource_versions.get(resource));
    }

    Json(VersionsResponse { versions })
}
