//! Room recommendation provider
//!
//! Produces ranked room suggestions for the booking flow. The trait is
//! object-safe so `ServerState` can hold any implementation behind an
//! `Arc<dyn RecommendationProvider>`. The static provider ships a
//! curated ranking and simulates inference latency with a configurable
//! delay before resolving.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A single room suggestion with a human-readable rationale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSuggestion {
    /// Room this suggestion points at
    pub room_id: String,
    /// Rationale shown verbatim to the guest
    pub reason: String,
    /// Confidence percentage (0..=100)
    pub confidence: u8,
}

/// Recommendation source
///
/// Implementations must be shareable across request handlers and
/// printable in state dumps.
#[async_trait]
pub trait RecommendationProvider: Send + Sync + std::fmt::Debug {
    /// Produce suggestions for a guest.
    ///
    /// Always resolves with a non-empty list. An unknown or absent
    /// guest falls back to the general ranking.
    async fn recommend(&self, guest_id: Option<&str>) -> Vec<RoomSuggestion>;
}

/// Curated static ranking, returned for every guest after a fixed delay
#[derive(Debug, Clone)]
pub struct StaticRecommendationProvider {
    delay_ms: u64,
}

impl StaticRecommendationProvider {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

#[async_trait]
impl RecommendationProvider for StaticRecommendationProvider {
    async fn recommend(&self, _guest_id: Option<&str>) -> Vec<RoomSuggestion> {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        vec![
            RoomSuggestion {
                room_id: "r1".to_string(),
                reason: "Based on your preferences for ocean views and luxury amenities"
                    .to_string(),
                confidence: 95,
            },
            RoomSuggestion {
                room_id: "r2".to_string(),
                reason: "Great value for money with essential amenities".to_string(),
                confidence: 78,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_ranked_list() {
        let provider = StaticRecommendationProvider::new(0);
        let suggestions = provider.recommend(None).await;

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].room_id, "r1");
        assert_eq!(suggestions[0].confidence, 95);
        assert_eq!(suggestions[1].room_id, "r2");
        assert_eq!(suggestions[1].confidence, 78);
        assert!(suggestions[0].confidence > suggestions[1].confidence);
    }

    #[tokio::test]
    async fn test_guest_id_does_not_change_static_ranking() {
        let provider = StaticRecommendationProvider::new(0);
        let anonymous = provider.recommend(None).await;
        let known = provider.recommend(Some("u1")).await;
        assert_eq!(anonymous, known);
    }

    #[test]
    fn test_suggestion_serializes_camel_case() {
        let suggestion = RoomSuggestion {
            room_id: "r1".to_string(),
            reason: "test".to_string(),
            confidence: 95,
        };
        let value = serde_json::to_value(&suggestion).unwrap();
        assert!(value.get("roomId").is_some());
        assert!(value.get("room_id").is_none());
    }
}
