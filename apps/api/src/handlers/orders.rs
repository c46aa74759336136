//! Order endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use stitch_core::Order;
use tracing::debug;

use super::{json_body, AppState};
use crate::error::{ApiError, ApiResult};

/// Body of a successful delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResponse {
    pub message: String,
    pub deleted_order: Order,
}

/// `GET /api/orders`
pub async fn list_orders(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    let orders = state.store.orders().list().await?;
    debug!(count = orders.len(), "Listing orders");
    Ok(Json(orders))
}

/// `GET /api/orders/{id}`
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Order>> {
    Ok(Json(state.store.orders().get(&id).await?))
}

/// `POST /api/orders`
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Order>)> {
    let body = json_body(payload)?;
    let order = state.store.orders().create(&body).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// `DELETE /api/orders/{id}`
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted_order = state.store.orders().delete(&id).await?;
    Ok(Json(DeleteResponse {
        message: "Order deleted successfully".to_string(),
        deleted_order,
    }))
}

/// `DELETE /api/orders` with no ID segment.
pub async fn delete_order_without_id() -> ApiError {
    ApiError::validation("id is required")
}
