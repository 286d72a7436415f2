//! Utility module - common helpers and types
//!
//! # Contents
//!
//! - [`AppError`] - application error type (from shared::error)
//! - [`ApiResponse`] - API response structure (from shared::error)
//! - Logging, time and validation helpers

pub mod error;
pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from the error module (which re-exports from shared)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
