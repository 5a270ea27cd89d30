//! Settings repository

use anyhow::Result;
use async_trait::async_trait;

use crate::models::SiteSettings;

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Stored settings, `None` when nothing was saved yet
    async fn get(&self) -> Result<Option<SiteSettings>>;
    async fn save(&self, settings: &SiteSettings) -> Result<()>;
}
