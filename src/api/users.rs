//! User endpoints

use axum::{routing::get, Router};

use crate::api::error::ApiError;
use crate::api::responses::ApiResponse;
use crate::api::state::AppState;
use crate::models::User;

pub fn router() -> Router<AppState> {
    Router::new().route("/users/me", get(current_user))
}

/// GET /api/v1/users/me - there is no authentication, so this is always the
/// placeholder account
async fn current_user() -> Result<ApiResponse, ApiError> {
    ApiResponse::ok().with_data("user", &User::current())
}
