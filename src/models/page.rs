//! Page model
//!
//! A page owns an ordered list of widget ids; the widgets themselves live in
//! their own collection.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Author;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Status a page starts in
pub const DRAFT_STATUS: &str = "draft";

/// SEO metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub seo_title: String,
}

/// Presentation settings of a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageSettings {
    #[serde(default = "default_layout")]
    pub layout: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub show_header: bool,
    #[serde(default = "default_true")]
    pub show_footer: bool,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            theme: default_theme(),
            show_header: true,
            show_footer: true,
        }
    }
}

fn default_layout() -> String {
    "default".to_string()
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_true() -> bool {
    true
}

fn default_status() -> String {
    DRAFT_STATUS.to_string()
}

/// CMS page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    /// Publication state, `draft` or `published` by convention
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub meta: PageMeta,
    /// Widget ids in display order
    #[serde(default)]
    pub widgets: Vec<String>,
    #[serde(default)]
    pub settings: PageSettings,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        let now = Utc::now();
        Self {
            id: String::new(),
            slug: slugify(&title),
            meta: PageMeta {
                seo_title: title.clone(),
                ..PageMeta::default()
            },
            title,
            status: default_status(),
            created_at: now,
            updated_at: now,
            author: Author::current_user(),
            widgets: Vec::new(),
            settings: PageSettings::default(),
        }
    }

    /// Assign a fresh id and creation timestamps, and derive the slug when
    /// the client left it empty.
    pub fn stamp_created(&mut self, now: DateTime<Utc>) {
        self.id = super::new_id();
        self.created_at = now;
        self.updated_at = now;
        if self.slug.is_empty() {
            self.slug = slugify(&self.title);
        }
    }

    /// Bind the record to `id` and refresh `updated_at`.
    pub fn stamp_updated(&mut self, id: &str, now: DateTime<Utc>) {
        self.id = id.to_string();
        self.updated_at = now;
    }
}

/// Lowercase the title and collapse every whitespace run into one `-`.
pub fn slugify(title: &str) -> String {
    WHITESPACE_RUN.replace_all(&title.to_lowercase(), "-").into_owned()
}
