//! Media service
//!
//! Turns a received upload into a media record. The file bytes are not
//! kept; only their size is recorded.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::UploadConfig;
use crate::db::repositories::MediaRepository;
use crate::models::{Author, Media};

/// Filename used when the client did not send one
pub const FALLBACK_FILENAME: &str = "upload";
/// Content type used when the client did not send one
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// What the upload endpoint read from the multipart body
#[derive(Debug, Clone, Default)]
pub struct UploadedFile {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub size: u64,
    pub alt_text: Option<String>,
    pub caption: Option<String>,
    pub tags: Vec<String>,
}

pub struct MediaService {
    repo: Arc<dyn MediaRepository>,
    config: Arc<UploadConfig>,
}

impl MediaService {
    pub fn new(repo: Arc<dyn MediaRepository>, config: Arc<UploadConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn record_upload(&self, upload: UploadedFile, uploaded_by: Author) -> Result<Media> {
        let filename = upload
            .filename
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_FILENAME.to_string());
        let mime_type = upload
            .content_type
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());
        let url = self.config.media_url(&filename);

        let mut media = Media::new(filename, url, mime_type, upload.size, uploaded_by);
        media.alt_text = upload.alt_text.unwrap_or_default();
        media.caption = upload.caption.unwrap_or_default();
        media.tags = upload.tags;

        self.repo.create(&media).await.context("Failed to save media record")?;
        tracing::info!(
            "Media uploaded: {} ({}, {} bytes)",
            media.filename,
            media.mime_type,
            media.size
        );
        Ok(media)
    }
}
