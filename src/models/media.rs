//! Media model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Author;

/// Uploaded media file record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Media {
    pub id: String,
    pub filename: String,
    pub original_name: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub mime_type: String,
    pub size: u64,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub uploaded_by: Author,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Media {
    /// Record for a freshly received upload
    pub fn new(
        filename: String,
        url: String,
        mime_type: String,
        size: u64,
        uploaded_by: Author,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: super::new_id(),
            original_name: filename.clone(),
            filename,
            url,
            thumbnail_url: None,
            mime_type,
            size,
            width: None,
            height: None,
            alt_text: String::new(),
            caption: String::new(),
            created_at: now,
            updated_at: now,
            uploaded_by,
            tags: Vec::new(),
        }
    }
}

/// Split a comma separated tag list, dropping blanks
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
