//! Service layer - server core services
//!
//! # Services
//!
//! - [`HttpService`] - HTTP server assembly and lifecycle

pub mod http;

pub use http::HttpService;
