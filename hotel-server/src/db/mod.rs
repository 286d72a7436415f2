//! Store Module
//!
//! In-memory collections, repositories and demo seed data

pub mod repository;
pub mod seed;

use std::sync::Arc;

use dashmap::DashMap;

use shared::models::{Booking, Feedback, HousekeepingTask, Room, ServiceOrder, User};

/// In-memory store: one concurrent map per collection, keyed by entity ID
///
/// Cloning is cheap (Arc-backed); every clone sees the same data.
/// There is no persistence: contents live for the process lifetime and
/// are rebuilt from seed data on restart.
#[derive(Clone, Debug, Default)]
pub struct HotelDb {
    inner: Arc<Collections>,
}

#[derive(Debug, Default)]
struct Collections {
    rooms: DashMap<String, Room>,
    bookings: DashMap<String, Booking>,
    tasks: DashMap<String, HousekeepingTask>,
    orders: DashMap<String, ServiceOrder>,
    users: DashMap<String, User>,
    feedback: DashMap<String, Feedback>,
}

impl HotelDb {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooms(&self) -> &DashMap<String, Room> {
        &self.inner.rooms
    }

    pub fn bookings(&self) -> &DashMap<String, Booking> {
        &self.inner.bookings
    }

    pub fn tasks(&self) -> &DashMap<String, HousekeepingTask> {
        &self.inner.tasks
    }

    pub fn orders(&self) -> &DashMap<String, ServiceOrder> {
        &self.inner.orders
    }

    pub fn users(&self) -> &DashMap<String, User> {
        &self.inner.users
    }

    pub fn feedback(&self) -> &DashMap<String, Feedback> {
        &self.inner.feedback
    }
}
