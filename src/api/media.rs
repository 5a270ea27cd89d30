//! Media upload endpoint

use axum::{
    extract::{multipart::MultipartRejection, DefaultBodyLimit, Multipart, State},
    routing::post,
    Router,
};

use crate::api::error::ApiError;
use crate::api::responses::ApiResponse;
use crate::api::state::AppState;
use crate::config::UploadConfig;
use crate::models::{parse_tags, Author};
use crate::services::UploadedFile;

pub fn router(config: &UploadConfig) -> Router<AppState> {
    Router::new()
        .route("/media/upload", post(upload_media))
        .layer(DefaultBodyLimit::max(config.max_body_size))
}

/// POST /api/v1/media/upload
///
/// Accepts multipart/form-data with a required file field named "file" and
/// optional text fields "alt_text", "caption" and "tags".
async fn upload_media(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ApiResponse, ApiError> {
    let mut multipart = multipart?;
    let mut file: Option<UploadedFile> = None;
    let mut alt_text = None;
    let mut caption = None;
    let mut tags = Vec::new();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().map(|s| s.to_string());
                let content_type = field.content_type().map(|s| s.to_string());
                let mut size = 0u64;
                while let Some(chunk) = field.chunk().await? {
                    size += chunk.len() as u64;
                }
                file = Some(UploadedFile {
                    filename,
                    content_type,
                    size,
                    ..Default::default()
                });
            }
            "alt_text" => alt_text = Some(field.text().await?),
            "caption" => caption = Some(field.text().await?),
            "tags" => tags = parse_tags(&field.text().await?),
            _ => {
                tracing::debug!("Ignoring multipart field {:?}", name);
            }
        }
    }

    let Some(mut file) = file else {
        return Err(ApiError::validation_error("Field required: file"));
    };
    file.alt_text = alt_text;
    file.caption = caption;
    file.tags = tags;

    let media = state
        .media_service
        .record_upload(file, Author::current_user())
        .await?;
    ApiResponse::ok()
        .with_message("Media uploaded successfully")
        .with_data("media", &media)
}
