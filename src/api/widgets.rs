//! Widgets API endpoints

use axum::{
    extract::State,
    routing::{get, post, put},
    Router,
};

use crate::api::error::{ApiError, ApiJson, ApiPath};
use crate::api::responses::ApiResponse;
use crate::api::state::AppState;
use crate::models::Widget;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/widgets", post(create_widget))
        .route("/widgets/types", get(list_widget_types))
        .route("/widgets/{id}", put(update_widget).delete(delete_widget))
}

async fn create_widget(
    State(state): State<AppState>,
    ApiJson(widget): ApiJson<Widget>,
) -> Result<ApiResponse, ApiError> {
    let widget = state.widget_service.create(widget).await?;
    ApiResponse::ok()
        .with_message("Widget created successfully")
        .with_data("widget", &widget)
}

async fn update_widget(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(widget): ApiJson<Widget>,
) -> Result<ApiResponse, ApiError> {
    let widget = state.widget_service.update(&id, widget).await?;
    ApiResponse::ok()
        .with_message("Widget updated successfully")
        .with_data("widget", &widget)
}

async fn delete_widget(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<ApiResponse, ApiError> {
    state.widget_service.delete(&id).await?;
    Ok(ApiResponse::ok().with_message("Widget deleted successfully"))
}

/// GET /api/v1/widgets/types - widget palette for the editor
async fn list_widget_types(State(state): State<AppState>) -> Result<ApiResponse, ApiError> {
    ApiResponse::ok().with_data("types", &state.widget_service.catalog())
}
