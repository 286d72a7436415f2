//! Room API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::RoomRepository;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{CleaningStatusUpdate, Room};

const RESOURCE: &str = "rooms";

/// List filter
#[derive(Debug, Deserialize)]
pub struct RoomListQuery {
    pub available: Option<bool>,
}

/// GET /api/rooms - list rooms, optionally filtered by availability
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<RoomListQuery>,
) -> AppResult<Json<Vec<Room>>> {
    let repo = RoomRepository::new(state.db.clone());
    let rooms = match query.available {
        Some(available) => repo.find_by_availability(available)?,
        None => repo.find_all()?,
    };
    Ok(Json(rooms))
}

/// GET /api/rooms/:id - fetch a single room
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.db.clone());
    let room = repo
        .find_by_id(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound).with_detail("id", id.as_str()))?;
    Ok(Json(room))
}

/// PUT /api/rooms/:id/cleaning - advance the cleaning lifecycle
///
/// Marking a room `clean` makes it available again; `cleaning` and
/// `needs_cleaning` take it out of service.
pub async fn update_cleaning(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CleaningStatusUpdate>,
) -> AppResult<Json<Room>> {
    let repo = RoomRepository::new(state.db.clone());
    let room = repo.update_cleaning_status(&id, payload.cleaning_status)?;

    state.bump_version(RESOURCE, "updated", &id);

    Ok(Json(room))
}
