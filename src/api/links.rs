//! Link manager API endpoints

use axum::{extract::State, routing::get, Router};

use crate::api::error::{ApiError, ApiJson};
use crate::api::responses::ApiResponse;
use crate::api::state::AppState;
use crate::models::Link;

pub fn router() -> Router<AppState> {
    Router::new().route("/links", get(list_links).post(create_link))
}

async fn list_links(State(state): State<AppState>) -> Result<ApiResponse, ApiError> {
    let links = state.link_service.list().await?;
    ApiResponse::ok().with_data("links", &links)
}

async fn create_link(
    State(state): State<AppState>,
    ApiJson(link): ApiJson<Link>,
) -> Result<ApiResponse, ApiError> {
    let link = state.link_service.create(link).await?;
    ApiResponse::ok()
        .with_message("Link created successfully")
        .with_data("link", &link)
}
