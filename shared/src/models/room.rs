//! Room Model

use serde::{Deserialize, Serialize};

/// Room tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomType {
    Standard,
    Deluxe,
    Suite,
    Presidential,
}

impl RoomType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Standard => "standard",
            RoomType::Deluxe => "deluxe",
            RoomType::Suite => "suite",
            RoomType::Presidential => "presidential",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Housekeeping state of a room
///
/// Allowed transitions: `needs_cleaning → cleaning → clean` and
/// `clean → needs_cleaning` (checkout dirties the room again).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CleaningStatus {
    Clean,
    Cleaning,
    NeedsCleaning,
}

impl CleaningStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleaningStatus::Clean => "clean",
            CleaningStatus::Cleaning => "cleaning",
            CleaningStatus::NeedsCleaning => "needs_cleaning",
        }
    }

    /// Whether `next` is a legal successor state
    pub fn can_transition_to(&self, next: CleaningStatus) -> bool {
        matches!(
            (self, next),
            (CleaningStatus::NeedsCleaning, CleaningStatus::Cleaning)
                | (CleaningStatus::Cleaning, CleaningStatus::Clean)
                | (CleaningStatus::Clean, CleaningStatus::NeedsCleaning)
        )
    }
}

impl std::fmt::Display for CleaningStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Room record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    /// Door number, e.g. "101"
    pub number: String,
    pub floor: u32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Nightly rate
    pub price: f64,
    /// Maximum guest count
    pub capacity: u32,
    pub amenities: Vec<String>,
    /// Ready to accept new guests
    pub available: bool,
    /// Average guest rating (0.0 - 5.0)
    pub rating: f64,
    pub cleaning_status: CleaningStatus,
}

/// Cleaning status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningStatusUpdate {
    pub cleaning_status: CleaningStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cleaning_transitions_allowed() {
        assert!(CleaningStatus::NeedsCleaning.can_transition_to(CleaningStatus::Cleaning));
        assert!(CleaningStatus::Cleaning.can_transition_to(CleaningStatus::Clean));
        assert!(CleaningStatus::Clean.can_transition_to(CleaningStatus::NeedsCleaning));
    }

    #[test]
    fn test_cleaning_transitions_rejected() {
        // Skipping a step or going backwards is not allowed
        assert!(!CleaningStatus::NeedsCleaning.can_transition_to(CleaningStatus::Clean));
        assert!(!CleaningStatus::Clean.can_transition_to(CleaningStatus::Cleaning));
        assert!(!CleaningStatus::Cleaning.can_transition_to(CleaningStatus::NeedsCleaning));
        // Self transitions are no-ops and rejected
        assert!(!CleaningStatus::Cleaning.can_transition_to(CleaningStatus::Cleaning));
    }

    #[test]
    fn test_cleaning_status_serde() {
        assert_eq!(
            serde_json::to_string(&CleaningStatus::NeedsCleaning).unwrap(),
            "\"needs_cleaning\""
        );
        let parsed: CleaningStatus = serde_json::from_str("\"cleaning\"").unwrap();
        assert_eq!(parsed, CleaningStatus::Cleaning);
    }

    #[test]
    fn test_room_wire_format() {
        let room = Room {
            id: "r1".to_string(),
            number: "301".to_string(),
            floor: 3,
            room_type: RoomType::Suite,
            price: 450.0,
            capacity: 4,
            amenities: vec!["Ocean View".to_string(), "WiFi".to_string()],
            available: true,
            rating: 4.8,
            cleaning_status: CleaningStatus::Clean,
        };
        let json = serde_json::to_value(&room).unwrap();
        assert_eq!(json["type"], "suite");
        assert_eq!(json["cleaningStatus"], "clean");
        assert_eq!(json["number"], "301");
    }
}
