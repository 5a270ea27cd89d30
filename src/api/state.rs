//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::db::Repositories;
use crate::services::{
    LinkService, MediaService, PageService, SettingsService, TransferService, WidgetService,
};

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub page_service: Arc<PageService>,
    pub widget_service: Arc<WidgetService>,
    pub media_service: Arc<MediaService>,
    pub link_service: Arc<LinkService>,
    pub settings_service: Arc<SettingsService>,
    pub transfer_service: Arc<TransferService>,
}

impl AppState {
    /// Wire every service to the given repositories
    pub fn new(config: Config, repos: Repositories) -> Self {
        let upload_config = Arc::new(config.upload.clone());
        Self {
            config: Arc::new(config),
            page_service: Arc::new(PageService::new(repos.pages.clone(), repos.widgets.clone())),
            widget_service: Arc::new(WidgetService::new(repos.widgets.clone())),
            media_service: Arc::new(MediaService::new(repos.media.clone(), upload_config)),
            link_service: Arc::new(LinkService::new(repos.links.clone())),
            settings_service: Arc::new(SettingsService::new(repos.settings.clone())),
            transfer_service: Arc::new(TransferService::new(repos)),
        }
    }
}
