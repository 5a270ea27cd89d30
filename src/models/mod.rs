//! Data models
//!
//! This module contains the data structures of the Blockpress CMS:
//! - Content entities (Page, Widget, Media, Link)
//! - Accounts (User, Author)
//! - The site settings singleton
//! - The export snapshot of all collections

mod link;
mod media;
mod page;
mod settings;
mod user;
mod widget;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use link::{Link, NEW_TAB_REL};
pub use media::{parse_tags, Media};
pub use page::{slugify, Page, PageMeta, PageSettings};
pub use settings::SiteSettings;
pub use user::{Author, User};
pub use widget::{BoxSpacing, Widget, WidgetLayout, WidgetType};

/// New record id (UUID v4)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Every collection of the CMS at one point in time
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub pages: Vec<Page>,
    /// Widgets keyed by widget id
    pub widgets: BTreeMap<String, Widget>,
    pub media: Vec<Media>,
    pub links: Vec<Link>,
    pub users: Vec<User>,
    /// `None` until settings have been saved once
    pub settings: Option<SiteSettings>,
}
