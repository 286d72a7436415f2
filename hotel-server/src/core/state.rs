use std::sync::Arc;

use dashmap::DashMap;

use crate::core::Config;
use crate::db::HotelDb;
use crate::recommend::{RecommendationProvider, StaticRecommendationProvider};
use crate::services::HttpService;

/// Resource version manager
///
/// Lock-free per-resource version counters backed by DashMap.
/// Each resource type keeps an independent version that increments
/// atomically on every mutation.
///
/// Clients poll `/api/sync/versions` and compare versions to decide
/// which collections to refetch.
#[derive(Debug)]
pub struct ResourceVersions {
    versions: DashMap<String, u64>,
}

impl ResourceVersions {
    /// Create an empty version manager
    pub fn new() -> Self {
        Self {
            versions: DashMap::new(),
        }
    }

    /// Increment the version for a resource and return the new value
    ///
    /// Unknown resources start from 0 (first increment returns 1)
    pub fn increment(&self, resource: &str) -> u64 {
        let mut entry = self.versions.entry(resource.to_string()).or_insert(0);
        *entry += 1;
        *entry
    }

    /// Get the current version for a resource
    ///
    /// Returns 0 for resources that have never changed
    pub fn get(&self, resource: &str) -> u64 {
        self.versions.get(resource).map(|v| *v).unwrap_or(0)
    }
}

impl Default for ResourceVersions {
    fn default() -> Self {
        Self::new()
    }
}

/// Server state - shared handle to every service
///
/// ServerState is the backbone of the hotel backend. All fields are
/// cheap to clone (Arc-backed), so handlers receive it by value.
///
/// # Components
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | db | HotelDb | In-memory store |
/// | recommender | Arc<dyn RecommendationProvider> | Room suggestion provider |
/// | http | HttpService | HTTP service |
/// | resource_versions | Arc<ResourceVersions> | Per-resource change counters |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// In-memory store
    pub db: HotelDb,
    /// Room suggestion provider
    pub recommender: Arc<dyn RecommendationProvider>,
    /// HTTP service
    pub http: HttpService,
    /// Resource version manager (incremented on every mutation)
    pub resource_versions: Arc<ResourceVersions>,
}

impl ServerState {
    /// Create server state (manual construction)
    ///
    /// Prefer [`ServerState::initialize`] outside of tests
    pub fn new(
        config: Config,
        db: HotelDb,
        recommender: Arc<dyn RecommendationProvider>,
        http: HttpService,
        resource_versions: Arc<ResourceVersions>,
    ) -> Self {
        Self {
            config,
            db,
            recommender,
            http,
            resource_versions,
        }
    }

    /// Initialize server state
    ///
    /// In order:
    /// 1. Store (seeded with demo data when configured)
    /// 2. Recommendation provider
    /// 3. HTTP service, late-initialized with the finished state
    pub async fn initialize(config: &Config) -> Self {
        let db = HotelDb::new();
        if config.seed_demo_data {
            crate::db::seed::seed_demo_data(&db);
            tracing::info!(
                rooms = db.rooms().len(),
                bookings = db.bookings().len(),
                "Demo data seeded"
            );
        }

        let recommender: Arc<dyn RecommendationProvider> =
            Arc::new(StaticRecommendationProvider::new(config.suggestion_delay_ms));
        let http = HttpService::new(config.clone());
        let resource_versions = Arc::new(ResourceVersions::new());

        let state = Self::new(
            config.clone(),
            db,
            recommender,
            http.clone(),
            resource_versions,
        );

        // Late initialization for HttpService (needs state)
        http.initialize(state.clone());

        state
    }

    /// Get the HTTP service
    pub fn http_service(&self) -> &HttpService {
        &self.http
    }

    /// Record a resource change
    ///
    /// Increments the resource version so `/api/sync/versions` reflects
    /// the change. Returns the new version.
    ///
    /// # Arguments
    /// - `resource`: resource type ("rooms", "bookings", "housekeeping")
    /// - `action`: change kind ("created", "updated")
    /// - `id`: entity ID
    pub fn bump_version(&self, resource: &str, action: &str, id: &str) -> u64 {
        let version = self.resource_versions.increment(resource);
        tracing::debug!(resource, action, id, version, "Resource changed");
        version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_versions_start_at_zero() {
        let versions = ResourceVersions::new();
        assert_eq!(versions.get("rooms"), 0);
    }

    #[test]
    fn test_increment_returns_new_value() {
        let versions = ResourceVersions::new();
        assert_eq!(versions.increment("bookings"), 1);
        assert_eq!(versions.increment("bookings"), 2);
        assert_eq!(versions.get("bookings"), 2);
        // Other resources are unaffected
        assert_eq!(versions.get("rooms"), 0);
    }
}
