//! Repositories
//!
//! One trait per entity. Services only see the traits, so a storage backend
//! can be swapped in without touching the API layer.

pub mod detached;
pub mod import;
pub mod link;
pub mod media;
pub mod page;
pub mod settings;
pub mod user;
pub mod widget;

use std::sync::Arc;

pub use detached::DetachedRepository;
pub use import::ImportRepository;
pub use link::LinkRepository;
pub use media::MediaRepository;
pub use page::PageRepository;
pub use settings::SettingsRepository;
pub use user::UserRepository;
pub use widget::WidgetRepository;

/// Handles to every repository the services need
#[derive(Clone)]
pub struct Repositories {
    pub pages: Arc<dyn PageRepository>,
    pub widgets: Arc<dyn WidgetRepository>,
    pub media: Arc<dyn MediaRepository>,
    pub links: Arc<dyn LinkRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub users: Arc<dyn UserRepository>,
    pub import: Arc<dyn ImportRepository>,
}
