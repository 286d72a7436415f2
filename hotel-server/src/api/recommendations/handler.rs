//! Room Recommendation API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::recommend::RoomSuggestion;

/// Recommendation query
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub guest_id: Option<String>,
}

/// GET /api/recommendations - ranked room suggestions
///
/// Resolves after the provider's configured delay. Never fails; an
/// unknown guest gets the general ranking.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RecommendationQuery>,
) -> Json<Vec<RoomSuggestion>> {
    let suggestions = state.recommender.recommend(query.guest_id.as_deref()).await;
    Json(suggestions)
}
