//! Site settings API endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};

use crate::api::error::{ApiError, ApiJson};
use crate::api::responses::ApiResponse;
use crate::api::state::AppState;
use crate::models::SiteSettings;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/settings", get(get_settings).put(update_settings))
        .route("/settings/reset", post(reset_settings))
}

/// GET /api/v1/settings - stored settings, or the defaults
async fn get_settings(State(state): State<AppState>) -> Result<ApiResponse, ApiError> {
    let settings = state.settings_service.get().await?;
    ApiResponse::ok().with_data("settings", &settings)
}

/// PUT /api/v1/settings
async fn update_settings(
    State(state): State<AppState>,
    ApiJson(settings): ApiJson<SiteSettings>,
) -> Result<ApiResponse, ApiError> {
    let settings = state.settings_service.update(settings).await?;
    ApiResponse::ok()
        .with_message("Settings updated successfully")
        .with_data("settings", &settings)
}

/// POST /api/v1/settings/reset
async fn reset_settings(State(state): State<AppState>) -> Result<ApiResponse, ApiError> {
    let settings = state.settings_service.reset().await?;
    ApiResponse::ok()
        .with_message("Settings reset to defaults")
        .with_data("settings", &settings)
}
