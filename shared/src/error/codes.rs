//! Unified error codes for the StayEase hotel service
//!
//! This module defines all error codes used across the server and clients.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: User errors
//! - 2xxx: Room errors
//! - 3xxx: Booking errors
//! - 4xxx: Housekeeping errors
//! - 5xxx: Room service errors
//! - 6xxx: Feedback errors
//! - 7xxx: Recommendation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: User ====================
    /// User not found
    UserNotFound = 1001,
    /// Unknown user role
    UserRoleInvalid = 1002,

    // ==================== 2xxx: Room ====================
    /// Room not found
    RoomNotFound = 2001,
    /// Room is not available for booking
    RoomUnavailable = 2002,
    /// Guest count exceeds room capacity
    RoomCapacityExceeded = 2003,
    /// Room number already exists
    RoomNumberExists = 2004,
    /// Requested cleaning status transition is not allowed
    CleaningTransitionInvalid = 2005,

    // ==================== 3xxx: Booking ====================
    /// Booking not found
    BookingNotFound = 3001,
    /// Room, check-in, or check-out missing from the booking request
    BookingFieldsMissing = 3002,
    /// Check-out date must be strictly after check-in date
    CheckOutNotAfterCheckIn = 3003,
    /// Requested booking status transition is not allowed
    BookingTransitionInvalid = 3004,
    /// Check-in date lies in the past
    CheckInInPast = 3005,
    /// Guest count outside the accepted range
    GuestCountOutOfRange = 3006,

    // ==================== 4xxx: Housekeeping ====================
    /// Housekeeping task not found
    TaskNotFound = 4001,
    /// Housekeeping task has already been completed
    TaskAlreadyCompleted = 4002,
    /// Requested task status transition is not allowed
    TaskTransitionInvalid = 4003,

    // ==================== 5xxx: Room service ====================
    /// Room service order not found
    ServiceOrderNotFound = 5001,

    // ==================== 6xxx: Feedback ====================
    /// Feedback entry not found
    FeedbackNotFound = 6001,
    /// Rating outside the 1-5 range
    RatingOutOfRange = 6002,

    // ==================== 7xxx: Recommendation ====================
    /// Recommendation provider unavailable
    RecommendationUnavailable = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Data store error
    StorageError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // User
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::UserRoleInvalid => "Unknown user role",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomUnavailable => "Room is not available",
            ErrorCode::RoomCapacityExceeded => "Guest count exceeds room capacity",
            ErrorCode::RoomNumberExists => "Room number already exists",
            ErrorCode::CleaningTransitionInvalid => "Cleaning status transition is not allowed",

            // Booking
            ErrorCode::BookingNotFound => "Booking not found",
            ErrorCode::BookingFieldsMissing => "Please select dates and a room",
            ErrorCode::CheckOutNotAfterCheckIn => "Check-out must be after check-in",
            ErrorCode::BookingTransitionInvalid => "Booking status transition is not allowed",
            ErrorCode::CheckInInPast => "Check-in date cannot be in the past",
            ErrorCode::GuestCountOutOfRange => "Guest count must be between 1 and 4",

            // Housekeeping
            ErrorCode::TaskNotFound => "Housekeeping task not found",
            ErrorCode::TaskAlreadyCompleted => "Housekeeping task has already been completed",
            ErrorCode::TaskTransitionInvalid => "Task status transition is not allowed",

            // Room service
            ErrorCode::ServiceOrderNotFound => "Room service order not found",

            // Feedback
            ErrorCode::FeedbackNotFound => "Feedback not found",
            ErrorCode::RatingOutOfRange => "Rating must be between 1 and 5",

            // Recommendation
            ErrorCode::RecommendationUnavailable => "Recommendation provider unavailable",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Data store error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // User
            1001 => Ok(ErrorCode::UserNotFound),
            1002 => Ok(ErrorCode::UserRoleInvalid),

            // Room
            2001 => Ok(ErrorCode::RoomNotFound),
            2002 => Ok(ErrorCode::RoomUnavailable),
            2003 => Ok(ErrorCode::RoomCapacityExceeded),
            2004 => Ok(ErrorCode::RoomNumberExists),
            2005 => Ok(ErrorCode::CleaningTransitionInvalid),

            // Booking
            3001 => Ok(ErrorCode::BookingNotFound),
            3002 => Ok(ErrorCode::BookingFieldsMissing),
            3003 => Ok(ErrorCode::CheckOutNotAfterCheckIn),
            3004 => Ok(ErrorCode::BookingTransitionInvalid),
            3005 => Ok(ErrorCode::CheckInInPast),
            3006 => Ok(ErrorCode::GuestCountOutOfRange),

            // Housekeeping
            4001 => Ok(ErrorCode::TaskNotFound),
            4002 => Ok(ErrorCode::TaskAlreadyCompleted),
            4003 => Ok(ErrorCode::TaskTransitionInvalid),

            // Room service
            5001 => Ok(ErrorCode::ServiceOrderNotFound),

            // Feedback
            6001 => Ok(ErrorCode::FeedbackNotFound),
            6002 => Ok(ErrorCode::RatingOutOfRange),

            // Recommendation
            7001 => Ok(ErrorCode::RecommendationUnavailable),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
