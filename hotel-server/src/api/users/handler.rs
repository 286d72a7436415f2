//! User Directory API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::AppResult;
use shared::models::{User, UserRole};

/// List filter
#[derive(Debug, Deserialize)]
pub struct UserListQuery {
    pub role: Option<UserRole>,
}

/// GET /api/users - list users, optionally filtered by role
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<UserListQuery>,
) -> AppResult<Json<Vec<User>>> {
    let repo = UserRepository::new(state.db.clone());
    let users = match query.role {
        Some(role) => repo.find_by_role(role)?,
        None => repo.find_all()?,
    };
    Ok(Json(users))
}
