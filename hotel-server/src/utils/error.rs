//! Unified error handling
//!
//! The error types live in `shared::error` so API clients can share
//! them; this module re-exports everything handlers need from
//! `crate::utils`.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
