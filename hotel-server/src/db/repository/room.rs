//! Room Repository

use super::BaseRepository;
use crate::db::HotelDb;
use crate::utils::error::{AppError, AppResult, ErrorCode};
use shared::models::{CleaningStatus, Room};

#[derive(Clone)]
pub struct RoomRepository {
    base: BaseRepository,
}

impl RoomRepository {
    pub fn new(db: HotelDb) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all rooms, ordered by room number
    pub fn find_all(&self) -> AppResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .base
            .db()
            .rooms()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    /// Find rooms filtered by availability
    pub fn find_by_availability(&self, available: bool) -> AppResult<Vec<Room>> {
        let mut rooms: Vec<Room> = self
            .base
            .db()
            .rooms()
            .iter()
            .filter(|entry| entry.value().available == available)
            .map(|entry| entry.value().clone())
            .collect();
        rooms.sort_by(|a, b| a.number.cmp(&b.number));
        Ok(rooms)
    }

    /// Find room by id
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Room>> {
        Ok(self
            .base
            .db()
            .rooms()
            .get(id)
            .map(|entry| entry.value().clone()))
    }

    /// Apply a cleaning status transition
    ///
    /// Availability is coupled to cleaning: `clean` puts the room back
    /// in service, `cleaning` and `needs_cleaning` take it out.
    pub fn update_cleaning_status(&self, id: &str, next: CleaningStatus) -> AppResult<Room> {
        let mut entry = self.base.db().rooms().get_mut(id).ok_or_else(|| {
            AppError::with_message(ErrorCode::RoomNotFound, format!("Room {} not found", id))
        })?;

        let current = entry.cleaning_status;
        if !current.can_transition_to(next) {
            return Err(AppError::transition(
                ErrorCode::CleaningTransitionInvalid,
                current,
                next,
            ));
        }

        entry.cleaning_status = next;
        entry.available = next == CleaningStatus::Clean;
        Ok(entry.value().clone())
    }
}
