//! Common types for the shared crate
//!
//! Utility types used across the service

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;
