//! Booking Model

use crate::types::Timestamp;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Booking lifecycle status
///
/// Allowed transitions: `pending → confirmed | cancelled`,
/// `confirmed → completed`. Cancelled and completed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
        }
    }

    /// Whether `next` is a legal successor state
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (self, next),
            (BookingStatus::Pending, BookingStatus::Confirmed)
                | (BookingStatus::Pending, BookingStatus::Cancelled)
                | (BookingStatus::Confirmed, BookingStatus::Completed)
        )
    }

    /// Terminal states accept no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Cancelled | BookingStatus::Completed)
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Booking record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Time-ordered id with `b` prefix, e.g. "b5021..."
    pub id: String,
    pub guest_id: String,
    pub room_id: String,
    /// Check-in date (YYYY-MM-DD)
    pub check_in: NaiveDate,
    /// Check-out date (YYYY-MM-DD), strictly after check-in
    pub check_out: NaiveDate,
    /// Guest count
    pub guests: u32,
    /// Nightly price x nights, fixed at creation
    pub total_amount: f64,
    pub status: BookingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Creation time (epoch millis)
    pub created_at: Timestamp,
}

fn default_guests() -> u32 {
    1
}

/// Create booking payload
///
/// Room and dates are optional on the wire; creation rejects the
/// payload with a validation error when any of them is missing.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub guest_id: String,
    pub room_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    /// Guest count (1-4)
    #[serde(default = "default_guests")]
    #[validate(range(min = 1, max = 4))]
    pub guests: u32,
    pub special_requests: Option<String>,
}

/// Quote request - same shape as creation but never persisted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingQuote {
    pub room_id: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

/// Quote result - zero when room or dates are not yet selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingTotal {
    pub nights: i64,
    pub total: f64,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}
