//! Housekeeping API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::HousekeepingRepository;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{HousekeepingTask, TaskStatus, TaskStatusUpdate};

const RESOURCE: &str = "housekeeping";

/// List filter
#[derive(Debug, Deserialize)]
pub struct TaskListQuery {
    pub status: Option<TaskStatus>,
}

/// GET /api/housekeeping - list tasks, optionally filtered by status
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<TaskListQuery>,
) -> AppResult<Json<Vec<HousekeepingTask>>> {
    let repo = HousekeepingRepository::new(state.db.clone());
    let tasks = match query.status {
        Some(status) => repo.find_by_status(status)?,
        None => repo.find_all()?,
    };
    Ok(Json(tasks))
}

/// GET /api/housekeeping/:id - fetch a single task
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<HousekeepingTask>> {
    let repo = HousekeepingRepository::new(state.db.clone());
    let task = repo
        .find_by_id(&id)?
        .ok_or_else(|| AppError::new(ErrorCode::TaskNotFound).with_detail("id", id.as_str()))?;
    Ok(Json(task))
}

/// PUT /api/housekeeping/:id/status - move a task through its lifecycle
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TaskStatusUpdate>,
) -> AppResult<Json<HousekeepingTask>> {
    let repo = HousekeepingRepository::new(state.db.clone());
    let task = repo.update_status(&id, payload.status)?;

    state.bump_version(RESOURCE, "updated", &id);

    Ok(Json(task))
}
