//! Pricing config and price preview endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::Value;
use stitch_core::{PricingConfig, Quote};

use super::{json_body, AppState};
use crate::error::ApiResult;

/// `GET /api/config`
pub async fn get_config(State(state): State<AppState>) -> ApiResult<Json<PricingConfig>> {
    Ok(Json(state.store.pricing().get().await?))
}

/// `POST /api/config/update` - merges a partial config, returns the full one.
pub async fn update_config(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<PricingConfig>> {
    let body = json_body(payload)?;
    Ok(Json(state.store.pricing().update(&body).await?))
}

/// `POST /api/price/quote` - itemized price under the stored config.
pub async fn quote_price(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Quote>> {
    let body = json_body(payload)?;
    Ok(Json(state.store.pricing().quote(&body).await?))
}
