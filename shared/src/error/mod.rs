//! Unified error system
//!
//! Provides standardized error codes, error types, and API response
//! structures shared across the service.
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors (validation, not found, bad request)
//! - 1xxx: User errors
//! - 2xxx: Room errors (availability, capacity, cleaning state)
//! - 3xxx: Booking errors (fields, dates, status transitions)
//! - 4xxx: Housekeeping errors
//! - 5xxx: Room service errors
//! - 6xxx: Feedback errors
//! - 7xxx: Recommendation errors
//! - 9xxx: System errors
//!
//! # Usage
//!
//! ```rust
//! use shared::error::{AppError, AppResult, ErrorCode};
//!
//! fn find_room(id: &str) -> AppResult<String> {
//!     if id.is_empty() {
//!         return Err(AppError::validation("Room id must not be empty"));
//!     }
//!     Err(AppError::with_message(
//!         ErrorCode::RoomNotFound,
//!         format!("Room {} not found", id),
//!     ))
//! }
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
