//! Booking Repository
//!
//! Owns the booking lifecycle: required-field checks, date ordering,
//! guest-count bounds, capacity, pricing and id generation all happen
//! here, before anything is appended to the collection.

use chrono::NaiveDate;
use validator::Validate;

use super::BaseRepository;
use crate::db::HotelDb;
use crate::pricing;
use crate::utils::error::{AppError, AppResult, ErrorCode};
use crate::utils::validation::{
    MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text, validate_required_text,
};
use shared::models::{Booking, BookingCreate, BookingStatus};
use shared::util::{now_millis, prefixed_id};

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: HotelDb) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all bookings, oldest first
    pub fn find_all(&self) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .base
            .db()
            .bookings()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        bookings.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(bookings)
    }

    /// Find bookings with the given status, oldest first
    pub fn find_by_status(&self, status: BookingStatus) -> AppResult<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .base
            .db()
            .bookings()
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect();
        bookings.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(bookings)
    }

    /// Find booking by id
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<Booking>> {
        Ok(self
            .base
            .db()
            .bookings()
            .get(id)
            .map(|entry| entry.value().clone()))
    }

    /// Create a booking
    ///
    /// `today` is the current date in the hotel timezone; check-in may
    /// not fall before it. The booking is born `confirmed` with a fresh
    /// time-ordered id and the computed total.
    pub fn create(&self, data: BookingCreate, today: NaiveDate) -> AppResult<Booking> {
        // Room and both dates must be selected before anything else is checked
        let (Some(room_id), Some(check_in), Some(check_out)) =
            (data.room_id.as_deref(), data.check_in, data.check_out)
        else {
            return Err(AppError::new(ErrorCode::BookingFieldsMissing));
        };

        validate_required_text(&data.guest_id, "guestId", MAX_SHORT_TEXT_LEN)?;
        validate_optional_text(data.special_requests.as_deref(), "specialRequests", MAX_NOTE_LEN)?;

        if check_out <= check_in {
            return Err(AppError::new(ErrorCode::CheckOutNotAfterCheckIn)
                .with_detail("checkIn", check_in.to_string())
                .with_detail("checkOut", check_out.to_string()));
        }

        if check_in < today {
            return Err(AppError::new(ErrorCode::CheckInInPast)
                .with_detail("checkIn", check_in.to_string())
                .with_detail("today", today.to_string()));
        }

        if data.validate().is_err() {
            return Err(AppError::new(ErrorCode::GuestCountOutOfRange)
                .with_detail("guests", data.guests));
        }

        let room = self
            .base
            .db()
            .rooms()
            .get(room_id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::RoomNotFound,
                    format!("Room {} not found", room_id),
                )
            })?;

        if data.guests > room.capacity {
            return Err(AppError::new(ErrorCode::RoomCapacityExceeded)
                .with_detail("guests", data.guests)
                .with_detail("capacity", room.capacity));
        }

        let booking = Booking {
            id: prefixed_id("b"),
            guest_id: data.guest_id,
            room_id: room.id.clone(),
            check_in,
            check_out,
            guests: data.guests,
            total_amount: pricing::booking_total(room.price, check_in, check_out),
            status: BookingStatus::Confirmed,
            special_requests: data.special_requests.filter(|s| !s.trim().is_empty()),
            created_at: now_millis(),
        };

        self.base
            .db()
            .bookings()
            .insert(booking.id.clone(), booking.clone());
        Ok(booking)
    }

    /// Apply a booking status transition, mutating only the status field
    pub fn update_status(&self, id: &str, next: BookingStatus) -> AppResult<Booking> {
        let mut entry = self.base.db().bookings().get_mut(id).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::BookingNotFound,
                format!("Booking {} not found", id),
            )
        })?;

        let current = entry.status;
        if !current.can_transition_to(next) {
            return Err(AppError::transition(
                ErrorCode::BookingTransitionInvalid,
                current,
                next,
            ));
        }

        entry.status = next;
        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::seed_demo_data;

    fn seeded() -> BookingRepository {
        let db = HotelDb::new();
        seed_demo_data(&db);
        BookingRepository::new(db)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(room_id: &str) -> BookingCreate {
        BookingCreate {
            guest_id: "u1".to_string(),
            room_id: Some(room_id.to_string()),
            check_in: Some(date(2026, 9, 10)),
            check_out: Some(date(2026, 9, 13)),
            guests: 2,
            special_requests: None,
        }
    }

    const TODAY: (i32, u32, u32) = (2026, 8, 22);

    fn today() -> NaiveDate {
        date(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_create_computes_total_and_confirms() {
        let repo = seeded();
        let booking = repo.create(request("r3"), today()).unwrap();

        assert!(booking.id.starts_with('b'));
        assert_eq!(booking.status, BookingStatus::Confirmed);
        // 3 nights at 220.0
        assert_eq!(booking.total_amount, 660.0);
        assert!(repo.find_by_id(&booking.id).unwrap().is_some());
    }

    #[test]
    fn test_create_missing_fields_appends_nothing() {
        let repo = seeded();
        let before = repo.find_all().unwrap().len();

        for data in [
            BookingCreate {
                room_id: None,
                ..request("r3")
            },
            BookingCreate {
                check_in: None,
                ..request("r3")
            },
            BookingCreate {
                check_out: None,
                ..request("r3")
            },
        ] {
            let err = repo.create(data, today()).unwrap_err();
            assert_eq!(err.code, ErrorCode::BookingFieldsMissing);
            assert_eq!(err.message, "Please select dates and a room");
        }

        assert_eq!(repo.find_all().unwrap().len(), before);
    }

    #[test]
    fn test_create_rejects_reversed_dates() {
        let repo = seeded();
        let mut data = request("r3");
        data.check_in = Some(date(2026, 9, 13));
        data.check_out = Some(date(2026, 9, 10));

        let err = repo.create(data, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckOutNotAfterCheckIn);

        // Same-day stays are not bookable either
        let mut data = request("r3");
        data.check_out = data.check_in;
        let err = repo.create(data, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckOutNotAfterCheckIn);
    }

    #[test]
    fn test_create_rejects_past_check_in() {
        let repo = seeded();
        let mut data = request("r3");
        data.check_in = Some(date(2026, 8, 21));

        let err = repo.create(data, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CheckInInPast);

        // Checking in today is allowed
        let mut data = request("r3");
        data.check_in = Some(today());
        data.check_out = Some(date(2026, 8, 24));
        assert!(repo.create(data, today()).is_ok());
    }

    #[test]
    fn test_create_guest_count_bounds() {
        let repo = seeded();

        let mut data = request("r1");
        data.guests = 0;
        let err = repo.create(data, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::GuestCountOutOfRange);

        let mut data = request("r1");
        data.guests = 5;
        let err = repo.create(data, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::GuestCountOutOfRange);

        // Within [1, 4] but above the room capacity of 2
        let mut data = request("r2");
        data.guests = 3;
        let err = repo.create(data, today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomCapacityExceeded);
    }

    #[test]
    fn test_create_unknown_room() {
        let repo = seeded();
        let err = repo.create(request("r99"), today()).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoomNotFound);
    }

    #[test]
    fn test_update_status_mutates_only_status() {
        let repo = seeded();
        let before = repo.find_by_id("b3").unwrap().unwrap();

        let after = repo
            .update_status("b3", BookingStatus::Confirmed)
            .unwrap();

        assert_eq!(after.status, BookingStatus::Confirmed);
        assert_eq!(after.id, before.id);
        assert_eq!(after.guest_id, before.guest_id);
        assert_eq!(after.room_id, before.room_id);
        assert_eq!(after.check_in, before.check_in);
        assert_eq!(after.check_out, before.check_out);
        assert_eq!(after.guests, before.guests);
        assert_eq!(after.total_amount, before.total_amount);
        assert_eq!(after.special_requests, before.special_requests);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn test_invalid_booking_transitions_rejected() {
        let repo = seeded();

        // b2 is completed, a terminal state
        let err = repo
            .update_status("b2", BookingStatus::Pending)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingTransitionInvalid);

        // b1 is confirmed; cancelling a confirmed booking is not allowed
        let err = repo
            .update_status("b1", BookingStatus::Cancelled)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingTransitionInvalid);

        // Self transition
        let err = repo
            .update_status("b1", BookingStatus::Confirmed)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BookingTransitionInvalid);
    }

    #[test]
    fn test_filter_by_status_after_confirming() {
        let db = HotelDb::new();
        seed_demo_data(&db);
        let repo = BookingRepository::new(db);

        repo.update_status("b3", BookingStatus::Confirmed).unwrap();

        let confirmed = repo.find_by_status(BookingStatus::Confirmed).unwrap();
        assert!(confirmed.iter().any(|b| b.id == "b3"));
        assert!(confirmed.iter().all(|b| b.status == BookingStatus::Confirmed));
        assert!(repo
            .find_by_status(BookingStatus::Pending)
            .unwrap()
            .is_empty());
    }
}
