//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: User errors
/// - 2xxx: Room errors
/// - 3xxx: Booking errors
/// - 4xxx: Housekeeping errors
/// - 5xxx: Room service errors
/// - 6xxx: Feedback errors
/// - 7xxx: Recommendation errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// User errors (1xxx)
    User,
    /// Room errors (2xxx)
    Room,
    /// Booking errors (3xxx)
    Booking,
    /// Housekeeping errors (4xxx)
    Housekeeping,
    /// Room service errors (5xxx)
    Service,
    /// Feedback errors (6xxx)
    Feedback,
    /// Recommendation errors (7xxx)
    Recommendation,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::User,
            2000..3000 => Self::Room,
            3000..4000 => Self::Booking,
            4000..5000 => Self::Housekeeping,
            5000..6000 => Self::Service,
            6000..7000 => Self::Feedback,
            7000..8000 => Self::Recommendation,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::User => "user",
            Self::Room => "room",
            Self::Booking => "booking",
            Self::Housekeeping => "housekeeping",
            Self::Service => "service",
            Self::Feedback => "feedback",
            Self::Recommendation => "recommendation",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
