//! Service Order Repository
//!
//! Room service orders are read-only: the kitchen system owns their
//! lifecycle, this side only lists them.

use super::BaseRepository;
use crate::db::HotelDb;
use crate::utils::error::AppResult;
use shared::models::{ServiceOrder, ServiceOrderStatus};

#[derive(Clone)]
pub struct ServiceOrderRepository {
    base: BaseRepository,
}

impl ServiceOrderRepository {
    pub fn new(db: HotelDb) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all orders, ordered by id
    pub fn find_all(&self) -> AppResult<Vec<ServiceOrder>> {
        let mut orders: Vec<ServiceOrder> = self
            .base
            .db()
            .orders()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        orders.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(orders)
    }

    /// Find orders with the given status, ordered by id
    pub fn find_by_status(&self, status: ServiceOrderStatus) -> AppResult<Vec<ServiceOrder>> {
        let mut orders: Vec<ServiceOrder> = self
            .base
            .db()
            .orders()
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect();
        orders.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(orders)
    }

    /// Find order by id
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<ServiceOrder>> {
        Ok(self
            .base
            .db()
            .orders()
            .get(id)
            .map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::seed_demo_data;

    fn seeded() -> ServiceOrderRepository {
        let db = HotelDb::new();
        seed_demo_data(&db);
        ServiceOrderRepository::new(db)
    }

    #[test]
    fn test_find_all() {
        let repo = seeded();
        let orders = repo.find_all().unwrap();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "o1");
    }

    #[test]
    fn test_find_preparing() {
        let repo = seeded();
        let preparing = repo
            .find_by_status(ServiceOrderStatus::Preparing)
            .unwrap();
        assert_eq!(preparing.len(), 1);
        assert_eq!(preparing[0].room_number, "101");
    }
}
