//! Pages API endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::api::error::{ApiError, ApiJson, ApiPath};
use crate::api::responses::{ApiResponse, Pagination};
use crate::api::state::AppState;
use crate::models::Page;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(list_pages).post(create_page))
        .route("/pages/{id}", get(get_page).put(update_page).delete(delete_page))
        .route("/pages/{id}/widgets", get(list_page_widgets))
        .route("/pages/{id}/widgets/reorder", post(reorder_widgets))
}

/// Reorder body: either a bare list of widget ids or `{widget_ids: [...]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ReorderRequest {
    Ids(Vec<String>),
    Wrapped { widget_ids: Vec<String> },
}

impl ReorderRequest {
    pub fn into_ids(self) -> Vec<String> {
        match self {
            Self::Ids(ids) | Self::Wrapped { widget_ids: ids } => ids,
        }
    }
}

/// GET /api/v1/pages
async fn list_pages(State(state): State<AppState>) -> Result<ApiResponse, ApiError> {
    let pages = state.page_service.list().await?;
    let total = pages.len() as u64;
    ApiResponse::ok()
        .with_data("pages", &pages)
        .map(|r| r.with_pagination(Pagination::with_total_items(total)))
}

/// GET /api/v1/pages/{id}
async fn get_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<ApiResponse, ApiError> {
    match state.page_service.get_by_id(&id).await? {
        Some(page) => ApiResponse::ok().with_data("page", &page),
        None => Err(ApiError::not_found("Page not found")),
    }
}

/// POST /api/v1/pages
async fn create_page(
    State(state): State<AppState>,
    ApiJson(page): ApiJson<Page>,
) -> Result<ApiResponse, ApiError> {
    let page = state.page_service.create(page).await?;
    ApiResponse::ok()
        .with_message("Page created successfully")
        .with_data("page", &page)
}

/// PUT /api/v1/pages/{id}
async fn update_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(page): ApiJson<Page>,
) -> Result<ApiResponse, ApiError> {
    let page = state.page_service.update(&id, page).await?;
    ApiResponse::ok()
        .with_message("Page updated successfully")
        .with_data("page", &page)
}

/// DELETE /api/v1/pages/{id}
async fn delete_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<ApiResponse, ApiError> {
    state.page_service.delete(&id).await?;
    Ok(ApiResponse::ok().with_message("Page deleted successfully"))
}

/// GET /api/v1/pages/{id}/widgets
async fn list_page_widgets(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
) -> Result<ApiResponse, ApiError> {
    let widgets = state.page_service.widgets(&id).await?;
    ApiResponse::ok().with_data("widgets", &widgets)
}

/// POST /api/v1/pages/{id}/widgets/reorder
async fn reorder_widgets(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<String>,
    ApiJson(body): ApiJson<ReorderRequest>,
) -> Result<ApiResponse, ApiError> {
    state.page_service.reorder_widgets(&id, &body.into_ids()).await?;
    Ok(ApiResponse::ok().with_message("Widgets reordered successfully"))
}
