//! Feedback Repository
//!
//! Read-only guest feedback; also the source of the average rating
//! shown on the admin dashboard.

use super::BaseRepository;
use crate::db::HotelDb;
use crate::utils::error::AppResult;
use shared::models::Feedback;

#[derive(Clone)]
pub struct FeedbackRepository {
    base: BaseRepository,
}

impl FeedbackRepository {
    pub fn new(db: HotelDb) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all feedback entries, oldest first
    pub fn find_all(&self) -> AppResult<Vec<Feedback>> {
        let mut entries: Vec<Feedback> = self
            .base
            .db()
            .feedback()
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        entries.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then_with(|| a.id.cmp(&b.id)));
        Ok(entries)
    }

    /// Mean rating across all feedback, `None` when there is none
    pub fn average_rating(&self) -> AppResult<Option<f64>> {
        let feedback = self.base.db().feedback();
        if feedback.is_empty() {
            return Ok(None);
        }
        let sum: u32 = feedback.iter().map(|entry| entry.value().rating as u32).sum();
        Ok(Some(sum as f64 / feedback.len() as f64))
    }
}
