//! Demo Seed Data
//!
//! Populates the store with a small, internally consistent hotel:
//! every booking total equals nights × nightly price, and cleaning
//! status is derived from availability (available rooms are clean,
//! occupied rooms need cleaning).

use chrono::NaiveDate;

use shared::models::{
    Booking, BookingStatus, CleaningStatus, Feedback, HousekeepingTask, OrderItem, Room, RoomType,
    ServiceOrder, ServiceOrderStatus, TaskPriority, TaskStatus, User, UserRole,
};
use shared::types::Timestamp;

use super::HotelDb;
use crate::utils::time;

/// Seed the store with demo data
///
/// Idempotent on an empty store; existing entries with the same IDs
/// are overwritten.
pub fn seed_demo_data(db: &HotelDb) {
    for room in demo_rooms() {
        db.rooms().insert(room.id.clone(), room);
    }
    for booking in demo_bookings() {
        db.bookings().insert(booking.id.clone(), booking);
    }
    for task in demo_tasks() {
        db.tasks().insert(task.id.clone(), task);
    }
    for order in demo_orders() {
        db.orders().insert(order.id.clone(), order);
    }
    for user in demo_users() {
        db.users().insert(user.id.clone(), user);
    }
    for entry in demo_feedback() {
        db.feedback().insert(entry.id.clone(), entry);
    }
}

fn strs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

// Seed timestamps are fixed UTC instants.
fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
    time::date_hms_to_millis(date(y, mo, d), h, mi, 0, chrono_tz::UTC)
}

fn demo_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "r1".into(),
            number: "301".into(),
            floor: 3,
            room_type: RoomType::Suite,
            price: 450.0,
            capacity: 4,
            amenities: strs(&[
                "Ocean View",
                "King Bed",
                "Jacuzzi",
                "Mini Bar",
                "WiFi",
                "Smart TV",
            ]),
            available: true,
            rating: 4.9,
            cleaning_status: CleaningStatus::Clean,
        },
        Room {
            id: "r2".into(),
            number: "102".into(),
            floor: 1,
            room_type: RoomType::Standard,
            price: 120.0,
            capacity: 2,
            amenities: strs(&["Queen Bed", "WiFi", "TV", "Coffee Maker"]),
            available: true,
            rating: 4.3,
            cleaning_status: CleaningStatus::Clean,
        },
        Room {
            id: "r3".into(),
            number: "201".into(),
            floor: 2,
            room_type: RoomType::Deluxe,
            price: 220.0,
            capacity: 3,
            amenities: strs(&["City View", "King Bed", "WiFi", "Smart TV", "Work Desk"]),
            available: true,
            rating: 4.6,
            cleaning_status: CleaningStatus::Clean,
        },
        Room {
            id: "r4".into(),
            number: "101".into(),
            floor: 1,
            room_type: RoomType::Standard,
            price: 110.0,
            capacity: 2,
            amenities: strs(&["Twin Beds", "WiFi", "TV"]),
            available: false,
            rating: 4.1,
            cleaning_status: CleaningStatus::NeedsCleaning,
        },
        Room {
            id: "r5".into(),
            number: "202".into(),
            floor: 2,
            room_type: RoomType::Deluxe,
            price: 240.0,
            capacity: 3,
            amenities: strs(&["Balcony", "Queen Bed", "WiFi", "Smart TV", "Mini Bar"]),
            available: true,
            rating: 4.7,
            cleaning_status: CleaningStatus::Clean,
        },
        Room {
            id: "r6".into(),
            number: "401".into(),
            floor: 4,
            room_type: RoomType::Presidential,
            price: 850.0,
            capacity: 4,
            amenities: strs(&[
                "Panoramic View",
                "King Bed",
                "Private Lounge",
                "Jacuzzi",
                "Butler Service",
                "WiFi",
            ]),
            available: false,
            rating: 5.0,
            cleaning_status: CleaningStatus::NeedsCleaning,
        },
    ]
}

fn demo_bookings() -> Vec<Booking> {
    vec![
        // Current stay: guest checked into room 101
        Booking {
            id: "b1".into(),
            guest_id: "u1".into(),
            room_id: "r4".into(),
            check_in: date(2026, 7, 10),
            check_out: date(2026, 7, 12),
            guests: 2,
            total_amount: 220.0,
            status: BookingStatus::Confirmed,
            special_requests: None,
            created_at: at(2026, 7, 1, 14, 30),
        },
        // Finished stay in the presidential suite
        Booking {
            id: "b2".into(),
            guest_id: "u1".into(),
            room_id: "r6".into(),
            check_in: date(2026, 6, 5),
            check_out: date(2026, 6, 8),
            guests: 4,
            total_amount: 2550.0,
            status: BookingStatus::Completed,
            special_requests: Some("Late checkout requested".into()),
            created_at: at(2026, 5, 20, 9, 15),
        },
        // Upcoming stay awaiting confirmation
        Booking {
            id: "b3".into(),
            guest_id: "u4".into(),
            room_id: "r3".into(),
            check_in: date(2026, 9, 1),
            check_out: date(2026, 9, 3),
            guests: 2,
            total_amount: 440.0,
            status: BookingStatus::Pending,
            special_requests: None,
            created_at: at(2026, 7, 28, 19, 45),
        },
    ]
}

fn demo_tasks() -> Vec<HousekeepingTask> {
    vec![
        HousekeepingTask {
            id: "t1".into(),
            room_number: "101".into(),
            task: "Deep cleaning after checkout".into(),
            priority: TaskPriority::High,
            status: TaskStatus::Pending,
        },
        HousekeepingTask {
            id: "t2".into(),
            room_number: "401".into(),
            task: "Replace linens and restock minibar".into(),
            priority: TaskPriority::Medium,
            status: TaskStatus::InProgress,
        },
        HousekeepingTask {
            id: "t3".into(),
            room_number: "202".into(),
            task: "Routine inspection".into(),
            priority: TaskPriority::Low,
            status: TaskStatus::Completed,
        },
    ]
}

fn demo_orders() -> Vec<ServiceOrder> {
    vec![
        ServiceOrder {
            id: "o1".into(),
            room_number: "101".into(),
            items: vec![
                OrderItem {
                    name: "Club Sandwich".into(),
                    quantity: 2,
                    price: 18.5,
                },
                OrderItem {
                    name: "Fresh Orange Juice".into(),
                    quantity: 1,
                    price: 8.0,
                },
            ],
            total: 45.0,
            status: ServiceOrderStatus::Preparing,
        },
        ServiceOrder {
            id: "o2".into(),
            room_number: "301".into(),
            items: vec![
                OrderItem {
                    name: "Caesar Salad".into(),
                    quantity: 1,
                    price: 16.0,
                },
                OrderItem {
                    name: "Sparkling Water".into(),
                    quantity: 1,
                    price: 6.0,
                },
            ],
            total: 22.0,
            status: ServiceOrderStatus::Delivered,
        },
    ]
}

fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "u1".into(),
            email: "john@example.com".into(),
            name: "John Smith".into(),
            role: UserRole::Guest,
            department: None,
        },
        User {
            id: "u2".into(),
            email: "sarah@stayease.com".into(),
            name: "Sarah Johnson".into(),
            role: UserRole::Staff,
            department: Some("Housekeeping".into()),
        },
        User {
            id: "u3".into(),
            email: "michael@stayease.com".into(),
            name: "Michael Chen".into(),
            role: UserRole::Admin,
            department: Some("Management".into()),
        },
        User {
            id: "u4".into(),
            email: "emma@example.com".into(),
            name: "Emma Davis".into(),
            role: UserRole::Guest,
            department: None,
        },
    ]
}

fn demo_feedback() -> Vec<Feedback> {
    vec![
        Feedback {
            id: "f1".into(),
            guest_name: "John Smith".into(),
            rating: 5,
            comment: "Amazing stay! The ocean view from the suite was breathtaking.".into(),
            category: "Room Quality".into(),
            timestamp: at(2026, 6, 9, 11, 0),
        },
        Feedback {
            id: "f2".into(),
            guest_name: "Emma Davis".into(),
            rating: 4,
            comment: "Great service, though check-in took a little long.".into(),
            category: "Service".into(),
            timestamp: at(2026, 7, 3, 16, 20),
        },
        Feedback {
            id: "f3".into(),
            guest_name: "Sophia Martinez".into(),
            rating: 3,
            comment: "Room was clean but the WiFi kept dropping.".into(),
            category: "Amenities".into(),
            timestamp: at(2026, 7, 15, 8, 45),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_all_collections() {
        let db = HotelDb::new();
        seed_demo_data(&db);

        assert_eq!(db.rooms().len(), 6);
        assert_eq!(db.bookings().len(), 3);
        assert_eq!(db.tasks().len(), 3);
        assert_eq!(db.orders().len(), 2);
        assert_eq!(db.users().len(), 4);
        assert_eq!(db.feedback().len(), 3);
    }

    #[test]
    fn test_cleaning_status_mirrors_availability() {
        for room in demo_rooms() {
            if room.available {
                assert_eq!(room.cleaning_status, CleaningStatus::Clean, "{}", room.id);
            } else {
                assert_eq!(
                    room.cleaning_status,
                    CleaningStatus::NeedsCleaning,
                    "{}",
                    room.id
                );
            }
        }
    }

    #[test]
    fn test_booking_totals_match_nights_times_price() {
        let rooms = demo_rooms();
        for booking in demo_bookings() {
            let room = rooms
                .iter()
                .find(|r| r.id == booking.room_id)
                .expect("booking references a seeded room");
            let nights = (booking.check_out - booking.check_in).num_days();
            assert_eq!(
                booking.total_amount,
                nights as f64 * room.price,
                "{}",
                booking.id
            );
        }
    }

    #[test]
    fn test_recommended_rooms_are_seeded() {
        let rooms = demo_rooms();
        let r1 = rooms.iter().find(|r| r.id == "r1").unwrap();
        assert!(r1.amenities.iter().any(|a| a == "Ocean View"));
        assert!(r1.available);

        let r2 = rooms.iter().find(|r| r.id == "r2").unwrap();
        assert_eq!(r2.room_type, RoomType::Standard);
        assert!(r2.available);
    }

    #[test]
    fn test_feedback_ratings_in_range() {
        for entry in demo_feedback() {
            assert!((1..=5).contains(&entry.rating));
        }
    }
}
