//! # HTTP Handlers
//!
//! Thin adapters: extract, call one store operation, wrap the result.
//!
//! ```text
//! orders.rs    GET/POST /api/orders, GET/DELETE /api/orders/{id}
//! pricing.rs   GET /api/config, POST /api/config/update, POST /api/price/quote
//! settings.rs  GET/PUT/POST /api/settings
//! system.rs    GET /api/stats, GET /api/health
//! ```

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;
use stitch_store::Store;

use crate::error::ApiResult;

pub mod orders;
pub mod pricing;
pub mod settings;
pub mod system;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        AppState { store }
    }
}

/// Unwraps a JSON body, turning a malformed one into a 400.
pub(crate) fn json_body(payload: Result<Json<Value>, JsonRejection>) -> ApiResult<Value> {
    let Json(body) = payload?;
    Ok(body)
}
