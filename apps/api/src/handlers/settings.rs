//! Settings endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use stitch_core::SettingsBag;

use super::{json_body, AppState};
use crate::error::{ApiError, ApiResult, ErrorCode};

#[derive(Debug, Serialize)]
pub struct SettingsUpdated {
    pub success: bool,
    pub settings: SettingsBag,
}

/// `GET /api/settings`
pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Json<SettingsBag>> {
    Ok(Json(state.store.settings().get().await?))
}

/// `PUT /api/settings` and `POST /api/settings`
///
/// Unlike other endpoints, a storage failure here reports its cause in
/// `details`; the settings screen shows it to the operator.
pub async fn update_settings(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<SettingsUpdated>> {
    let body = json_body(payload)?;

    match state.store.settings().update(&body).await {
        Ok(settings) => Ok(Json(SettingsUpdated {
            success: true,
            settings,
        })),
        Err(err) if err.is_client_error() => Err(err.into()),
        Err(err) => {
            tracing::error!(error = %err, "Failed to save settings");
            Err(ApiError::new(ErrorCode::StorageError, "Failed to save settings")
                .with_details(err.to_string()))
        }
    }
}
