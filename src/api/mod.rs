//! API layer - HTTP handlers and routing
//!
//! All endpoints live under `/api/v1`:
//! - Page and page-widget endpoints
//! - Widget endpoints
//! - Media upload
//! - Link manager
//! - Site settings
//! - Current user
//! - Export / import

pub mod error;
pub mod links;
pub mod media;
pub mod pages;
pub mod responses;
pub mod settings;
pub mod state;
pub mod transfer;
pub mod users;
pub mod widgets;

use anyhow::Context;
use axum::{
    http::{HeaderValue, StatusCode},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;

pub use error::{ApiError, ApiJson, ApiPath, ApiQuery};
pub use responses::{ApiResponse, Pagination, API_VERSION};
pub use state::AppState;

/// Prefix every API route is mounted under
pub const API_PREFIX: &str = "/api/v1";

/// Build the API router (routes relative to [`API_PREFIX`])
pub fn build_api_router(config: &Config) -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .merge(widgets::router())
        .merge(media::router(&config.upload))
        .merge(links::router())
        .merge(settings::router())
        .merge(users::router())
        .merge(transfer::router())
        .method_not_allowed_fallback(method_not_allowed)
}

/// Build the complete router with middleware
pub fn build_router(state: AppState) -> anyhow::Result<Router> {
    let cors = cors_layer(&state.config.server.cors_origin)?;

    Ok(Router::new()
        .nest(API_PREFIX, build_api_router(&state.config))
        .fallback(fallback)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state))
}

/// CORS for the single configured frontend origin, with credentials.
/// Methods and headers are mirrored from the preflight since wildcards are
/// not allowed together with credentials.
fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", origin))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

async fn fallback() -> ApiError {
    ApiError::not_found("Resource not found")
}

async fn method_not_allowed() -> ApiError {
    ApiError::from_status(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
