//! Data models
//!
//! Shared between the server and API clients. Wire format is
//! camelCase JSON; status enums carry their own transition tables.

pub mod booking;
pub mod feedback;
pub mod housekeeping;
pub mod room;
pub mod service_order;
pub mod user;

// Re-exports
pub use booking::*;
pub use feedback::*;
pub use housekeeping::*;
pub use room::*;
pub use service_order::*;
pub use user::*;
