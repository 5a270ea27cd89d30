//! Settings service

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::db::repositories::SettingsRepository;
use crate::models::SiteSettings;

pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Stored settings, or the defaults when none were saved
    pub async fn get(&self) -> Result<SiteSettings> {
        let stored = self.repo.get().await.context("Failed to load settings")?;
        Ok(stored.unwrap_or_default())
    }

    pub async fn update(&self, settings: SiteSettings) -> Result<SiteSettings> {
        self.repo.save(&settings).await.context("Failed to save settings")?;
        tracing::info!("Site settings updated");
        Ok(settings)
    }

    pub async fn reset(&self) -> Result<SiteSettings> {
        let settings = SiteSettings::default();
        self.repo.save(&settings).await.context("Failed to reset settings")?;
        tracing::info!("Site settings reset to defaults");
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DetachedRepository;

    #[tokio::test]
    async fn test_get_falls_back_to_defaults() {
        let svc = SettingsService::new(DetachedRepository::repositories().settings);
        assert_eq!(svc.get().await.unwrap(), SiteSettings::default());
    }

    #[tokio::test]
    async fn test_update_echoes_settings() {
        let svc = SettingsService::new(DetachedRepository::repositories().settings);
        let mut settings = SiteSettings::default();
        settings.site_name = "Field Notes".to_string();

        let saved = svc.update(settings.clone()).await.unwrap();

        assert_eq!(saved, settings);
    }
}
