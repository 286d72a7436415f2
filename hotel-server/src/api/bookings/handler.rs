//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{BookingRepository, RoomRepository};
use crate::pricing;
use crate::utils::time;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{
    Booking, BookingCreate, BookingQuote, BookingStatus, BookingStatusUpdate, BookingTotal,
};

const RESOURCE: &str = "bookings";

/// List filter
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
}

/// GET /api/bookings - list bookings, optionally filtered by status
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<BookingListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let repo = BookingRepository::new(state.db.clone());
    let bookings = match query.status {
        Some(status) => repo.find_by_status(status)?,
        None => repo.find_all()?,
    };
    Ok(Json(bookings))
}

/// GET /api/bookings/:id - fetch a single booking
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Booking>> {
    let repo = BookingRepository::new(state.db.clone());
    let booking = repo
        .find_by_id(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::BookingNotFound).with_detail("id", id.as_str()))?;
    Ok(Json(booking))
}

/// POST /api/bookings - create a booking
///
/// Rejects payloads with a missing room or date selection, a check-out
/// on or before the check-in, a check-in in the past (relative to the
/// configured hotel timezone), or a guest count outside the room's
/// limits. On success the booking is stored as `confirmed` with its
/// total fixed at the current nightly price.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    let repo = BookingRepository::new(state.db.clone());
    let today = time::today_in(state.config.timezone);
    let booking = repo.create(payload, today)?;

    state.bump_version(RESOURCE, "created", &booking.id);

    Ok(Json(booking))
}

/// POST /api/bookings/quote - price a prospective stay
///
/// Returns a zero quote while the room or either date is still
/// unselected, so callers can display a provisional total at any
/// point of the booking flow.
pub async fn quote(
    State(state): State<ServerState>,
    Json(payload): Json<BookingQuote>,
) -> AppResult<Json<BookingTotal>> {
    let rooms = RoomRepository::new(state.db.clone());
    let nightly_price = match payload.room_id.as_deref() {
        Some(id) => rooms.find_by_id(id)?.map(|room| room.price),
        None => None,
    };
    Ok(Json(pricing::quote(
        nightly_price,
        payload.check_in,
        payload.check_out,
    )))
}

/// PUT /api/bookings/:id/status - move a booking through its lifecycle
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BookingStatusUpdate>,
) -> AppResult<Json<Booking>> {
    let repo = BookingRepository::new(state.db.clone());
    let booking = repo.update_status(&id, payload.status)?;

    state.bump_version(RESOURCE, "updated", &id);

    Ok(Json(booking))
}
