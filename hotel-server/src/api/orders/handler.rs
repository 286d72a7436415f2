//! Room Service Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::ServiceOrderRepository;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{ServiceOrder, ServiceOrderStatus};

/// List filter
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<ServiceOrderStatus>,
}

/// GET /api/orders - list orders, optionally filtered by status
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<ServiceOrder>>> {
    let repo = ServiceOrderRepository::new(state.db.clone());
    let orders = match query.status {
        Some(status) => repo.find_by_status(status)?,
        None => repo.find_all()?,
    };
    Ok(Json(orders))
}

/// GET /api/orders/:id - fetch a single order
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ServiceOrder>> {
    let repo = ServiceOrderRepository::new(state.db.clone());
    let order = repo.find_by_id(&id)?.ok_or_else(|| {
        AppError::new(ErrorCode::ServiceOrderNotFound).with_detail("id", id.as_str())
    })?;
    Ok(Json(order))
}
