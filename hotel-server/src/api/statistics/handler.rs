//! Statistics API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::core::ServerState;
use crate::db::repository::{
    BookingRepository, FeedbackRepository, HousekeepingRepository, RoomRepository,
    ServiceOrderRepository,
};
use crate::utils::AppResult;
use crate::utils::time;
use shared::models::{BookingStatus, CleaningStatus, RoomType, ServiceOrderStatus, TaskStatus};

// ============================================================================
// Response Types
// ============================================================================

/// Staff dashboard overview
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    /// Confirmed bookings whose stay starts today
    pub todays_check_ins: usize,
    pub active_bookings: usize,
    pub available_rooms: usize,
    pub rooms_needing_cleaning: usize,
    pub pending_tasks: usize,
    pub preparing_orders: usize,
}

/// Revenue trend data point
#[derive(Debug, Clone, Serialize)]
pub struct RevenueTrendPoint {
    /// Month label, e.g. "Jun"
    pub month: String,
    pub revenue: f64,
}

/// Bookings per room tier
#[derive(Debug, Clone, Serialize)]
pub struct RoomTypeBookings {
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub count: usize,
}

/// Booking volume for one hour of the day
#[derive(Debug, Clone, Serialize)]
pub struct PeakHour {
    /// Hour label, e.g. "19:00"
    pub hour: String,
    pub bookings: usize,
}

/// Admin analytics response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    /// Percentage of rooms currently occupied
    pub occupancy_rate: f64,
    pub total_bookings: usize,
    /// Mean feedback rating, absent while no feedback exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    pub revenue_trend: Vec<RevenueTrendPoint>,
    pub room_type_bookings: Vec<RoomTypeBookings>,
    pub peak_hours: Vec<PeakHour>,
}

/// Tier order used for the booking distribution
const ROOM_TYPES: &[RoomType] = &[
    RoomType::Standard,
    RoomType::Deluxe,
    RoomType::Suite,
    RoomType::Presidential,
];

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/statistics/overview - staff dashboard counters
pub async fn get_overview(State(state): State<ServerState>) -> AppResult<Json<OverviewStats>> {
    let today = time::today_in(state.config.timezone);

    tracing::debug!(date = %today, "Computing staff overview");

    let rooms = RoomRepository::new(state.db.clone()).find_all()?;
    let active =
        BookingRepository::new(state.db.clone()).find_by_status(BookingStatus::Confirmed)?;
    let pending_tasks = HousekeepingRepository::new(state.db.clone())
        .find_by_status(TaskStatus::Pending)?
        .len();
    let preparing_orders = ServiceOrderRepository::new(state.db.clone())
        .find_by_status(ServiceOrderStatus::Preparing)?
        .len();

    let todays_check_ins = active.iter().filter(|b| b.check_in == today).count();
    let available_rooms = rooms.iter().filter(|r| r.available).count();
    let rooms_needing_cleaning = rooms
        .iter()
        .filter(|r| r.cleaning_status == CleaningStatus::NeedsCleaning)
        .count();

    Ok(Json(OverviewStats {
        todays_check_ins,
        active_bookings: active.len(),
        available_rooms,
        rooms_needing_cleaning,
        pending_tasks,
        preparing_orders,
    }))
}

/// GET /api/statistics - admin analytics computed from the store
pub async fn get_statistics(
    State(state): State<ServerState>,
) -> AppResult<Json<StatisticsResponse>> {
    let tz = state.config.timezone;

    tracing::debug!("Computing admin analytics");

    let rooms = RoomRepository::new(state.db.clone()).find_all()?;
    let bookings = BookingRepository::new(state.db.clone()).find_all()?;
    let average_rating = FeedbackRepository::new(state.db.clone())
        .average_rating()?
        .map(round1);

    // Occupied = not currently accepting guests
    let occupancy_rate = if rooms.is_empty() {
        0.0
    } else {
        let occupied = rooms.iter().filter(|r| !r.available).count();
        round1(occupied as f64 * 100.0 / rooms.len() as f64)
    };

    // Revenue by check-in month; cancelled bookings contribute nothing
    let mut revenue_by_month: BTreeMap<u32, f64> = BTreeMap::new();
    for booking in bookings
        .iter()
        .filter(|b| b.status != BookingStatus::Cancelled)
    {
        *revenue_by_month
            .entry(time::month_of(booking.check_in))
            .or_insert(0.0) += booking.total_amount;
    }
    let revenue_trend = revenue_by_month
        .into_iter()
        .map(|(month, revenue)| RevenueTrendPoint {
            month: time::month_abbrev(month).to_string(),
            revenue,
        })
        .collect();

    // Booking distribution across room tiers
    let type_by_room: HashMap<&str, RoomType> = rooms
        .iter()
        .map(|r| (r.id.as_str(), r.room_type))
        .collect();
    let mut count_by_type: HashMap<RoomType, usize> = HashMap::new();
    for booking in &bookings {
        if let Some(room_type) = type_by_room.get(booking.room_id.as_str()) {
            *count_by_type.entry(*room_type).or_insert(0) += 1;
        }
    }
    let room_type_bookings = ROOM_TYPES
        .iter()
        .map(|&room_type| RoomTypeBookings {
            room_type,
            count: count_by_type.get(&room_type).copied().unwrap_or(0),
        })
        .collect();

    // Booking activity per hour of day, in the hotel timezone
    let mut bookings_by_hour: BTreeMap<u32, usize> = BTreeMap::new();
    for booking in &bookings {
        *bookings_by_hour
            .entry(time::hour_in_tz(booking.created_at, tz))
            .or_insert(0) += 1;
    }
    let peak_hours = bookings_by_hour
        .into_iter()
        .map(|(hour, count)| PeakHour {
            hour: format!("{hour:02}:00"),
            bookings: count,
        })
        .collect();

    Ok(Json(StatisticsResponse {
        occupancy_rate,
        total_bookings: bookings.len(),
        average_rating,
        revenue_trend,
        room_type_bookings,
        peak_hours,
    }))
}
