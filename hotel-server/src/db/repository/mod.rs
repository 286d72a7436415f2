//! Repository Module
//!
//! Domain rules and collection access over the in-memory store. Each
//! repository owns the invariants of its collection; handlers stay
//! thin. Errors carry domain codes end to end, so the HTTP layer never
//! has to re-classify them.

// Rooms & housekeeping
pub mod housekeeping;
pub mod room;

// Bookings
pub mod booking;

// Room service
pub mod service_order;

// Directory & feedback
pub mod feedback;
pub mod user;

// Re-exports
pub use booking::BookingRepository;
pub use feedback::FeedbackRepository;
pub use housekeeping::HousekeepingRepository;
pub use room::RoomRepository;
pub use service_order::ServiceOrderRepository;
pub use user::UserRepository;

use crate::db::HotelDb;

/// Base repository with store reference
#[derive(Clone)]
pub struct BaseRepository {
    db: HotelDb,
}

impl BaseRepository {
    pub fn new(db: HotelDb) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &HotelDb {
        &self.db
    }
}
