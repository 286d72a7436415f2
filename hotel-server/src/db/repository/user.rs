//! User Repository
//!
//! Read-only directory of guests and staff.

use super::BaseRepository;
use crate::db::HotelDb;
use crate::utils::error::AppResult;
use shared::models::{User, UserRole};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: HotelDb) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all users, ordered by id
    pub fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .base
            .db()
            .users()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }

    /// Find users with the given role, ordered by id
    pub fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self
            .base
            .db()
            .users()
            .iter()
            .filter(|entry| entry.value().role == role)
            .map(|entry| entry.value().clone())
            .collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed::seed_demo_data;

    #[test]
    fn test_find_by_role() {
        let db = HotelDb::new();
        seed_demo_data(&db);
        let repo = UserRepository::new(db);

        let guests = repo.find_by_role(UserRole::Guest).unwrap();
        assert_eq!(guests.len(), 2);

        let staff = repo.find_by_role(UserRole::Staff).unwrap();
        assert_eq!(staff.len(), 1);
        assert_eq!(staff[0].department.as_deref(), Some("Housekeeping"));
    }
}
