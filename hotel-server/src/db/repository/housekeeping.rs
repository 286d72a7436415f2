//! Housekeeping Repository

use super::BaseRepository;
use crate::db::HotelDb;
use crate::utils::error::{AppError, AppResult, ErrorCode};
use shared::models::{HousekeepingTask, TaskStatus};

#[derive(Clone)]
pub struct HousekeepingRepository {
    base: BaseRepository,
}

impl HousekeepingRepository {
    pub fn new(db: HotelDb) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all tasks, ordered by id
    pub fn find_all(&self) -> AppResult<Vec<HousekeepingTask>> {
        let mut tasks: Vec<HousekeepingTask> = self
            .base
            .db()
            .tasks()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        tasks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(tasks)
    }

    /// Find tasks with the given status, ordered by id
    pub fn find_by_status(&self, status: TaskStatus) -> AppResult<Vec<HousekeepingTask>> {
        let mut tasks: Vec<HousekeepingTask> = self
            .base
            .db()
            .tasks()
            .iter()
            .filter(|entry| entry.value().status == status)
            .map(|entry| entry.value().clone())
            .collect();
        tasks.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(tasks)
    }

    /// Find task by id
    pub fn find_by_id(&self, id: &str) -> AppResult<Option<HousekeepingTask>> {
        Ok(self
            .base
            .db()
            .tasks()
            .get(id)
            .map(|entry| entry.value().clone()))
    }

    /// Apply a task status transition
    ///
    /// Completed tasks are terminal and reported as such rather than
    /// as a generic transition failure.
    pub fn update_status(&self, id: &str, next: TaskStatus) -> AppResult<HousekeepingTask> {
        let mut entry = self.base.db().tasks().get_mut(id).ok_or_else(|| {
            AppError::with_message(ErrorCode::TaskNotFound, format!("Task {} not found", id))
        })?;

        let current = entry.status;
        if current == TaskStatus::Completed {
            return Err(AppError::new(ErrorCode::TaskAlreadyCompleted).with_detail("id", id));
        }
        if !current.can_transition_to(next) {
            return Err(AppError::transition(
                ErrorCode::TaskTransitionInvalid,
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

    fn seeded() -> HousekeepingRepository {
        let db = HotelDb::new();
        seed_demo_data(&db);
        HousekeepingRepository::new(db)
    }

    #[test]
    fn test_find_by_status() {
        let repo = seeded();
        let pending = repo.find_by_status(TaskStatus::Pending).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "t1");
    }

    #[test]
    fn test_task_lifecycle() {
        let repo = seeded();

        let task = repo
            .update_status("t1", TaskStatus::InProgress)
            .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);

        let task = repo.update_status("t1", TaskStatus::Completed).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
    }

    #[test]
    fn test_pending_cannot_skip_to_completed() {
        let repo = seeded();
        let err = repo
            .update_status("t1", TaskStatus::Completed)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskTransitionInvalid);
    }

    #[test]
    fn test_completed_task_is_terminal() {
        let repo = seeded();
        let err = repo
            .update_status("t3", TaskStatus::InProgress)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskAlreadyCompleted);
    }

    #[test]
    fn test_unknown_task() {
        let repo = seeded();
        let err = repo
            .update_status("t99", TaskStatus::InProgress)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::TaskNotFound);
    }
}
