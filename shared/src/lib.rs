//! Shared types for the StayEase hotel service
//!
//! Common types used across crates: the unified error system,
//! domain models, and utility types.

pub mod error;
pub mod models;
pub mod types;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

// Error system re-exports (for convenient access)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
