//! Guest Feedback API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::FeedbackRepository;
use crate::utils::AppResult;
use shared::models::Feedback;

/// GET /api/feedback - list guest feedback, oldest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Feedback>>> {
    let repo = FeedbackRepository::new(state.db.clone());
    let feedback = repo.find_all()?;
    Ok(Json(feedback))
}
