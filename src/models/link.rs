//! Link model for the link manager

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Author;

/// `rel` applied to links that open in a new browsing context
pub const NEW_TAB_REL: &str = "noopener noreferrer";

/// Managed link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default = "default_target")]
    pub target: String,
    #[serde(default)]
    pub rel: String,
    /// `internal` or `external` by convention
    #[serde(default = "default_link_type", rename = "type")]
    pub link_type: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub created_by: Author,
}

fn default_target() -> String {
    "_self".to_string()
}

fn default_link_type() -> String {
    "external".to_string()
}

fn default_status() -> String {
    "active".to_string()
}

impl Link {
    /// Assign a fresh id and creation timestamps. A `_blank` target without
    /// an explicit `rel` gets [`NEW_TAB_REL`].
    pub fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.id = super::new_id();
        self.created_at = now;
        self.updated_at = now;
        if self.target == "_blank" && self.rel.is_empty() {
            self.rel = NEW_TAB_REL.to_string();
        }
    }
}
