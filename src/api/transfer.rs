//! Export / import endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::api::error::{ApiError, ApiJson, ApiQuery};
use crate::api::responses::ApiResponse;
use crate::api::state::AppState;
use crate::services::DEFAULT_EXPORT_FORMAT;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/export", get(export_data))
        .route("/import", post(import_data))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    DEFAULT_EXPORT_FORMAT.to_string()
}

/// GET /api/v1/export?format=json
async fn export_data(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ExportQuery>,
) -> Result<ApiResponse, ApiError> {
    let snapshot = state.transfer_service.export().await?;
    let settings = match &snapshot.settings {
        Some(settings) => serde_json::to_value(settings)
            .map_err(|e| ApiError::internal_error(format!("Failed to serialize settings: {}", e)))?,
        None => Value::Object(Map::new()),
    };

    Ok(ApiResponse::ok()
        .with_message("Data exported successfully")
        .with_data("pages", &snapshot.pages)?
        .with_data("widgets", &snapshot.widgets)?
        .with_data("media", &snapshot.media)?
        .with_data("links", &snapshot.links)?
        .with_data("users", &snapshot.users)?
        .with_data("settings", &settings)?
        .with_meta("format", query.format))
}

/// POST /api/v1/import - the document is handed to storage untouched
async fn import_data(
    State(state): State<AppState>,
    ApiJson(document): ApiJson<Map<String, Value>>,
) -> Result<ApiResponse, ApiError> {
    state.transfer_service.import(&document).await?;
    Ok(ApiResponse::ok().with_message("Data imported successfully"))
}
