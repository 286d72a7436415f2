//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness and detailed store checks
//! - [`sync`] - per-resource version counters for polling clients
//! - [`rooms`] - room directory and cleaning lifecycle
//! - [`bookings`] - booking creation, quotes and lifecycle
//! - [`housekeeping`] - housekeeping task queue
//! - [`orders`] - room service order views
//! - [`users`] - user directory
//! - [`feedback`] - guest feedback
//! - [`statistics`] - staff overview and admin analytics
//! - [`recommendations`] - room suggestions

pub mod health;
pub mod sync;

// Data model API
pub mod rooms;
pub mod bookings;
pub mod housekeeping;
pub mod orders;
pub mod users;
pub mod feedback;

// Insight API
pub mod statistics;
pub mod recommendations;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
