//! Detached repository
//!
//! Implements every repository trait without a storage backend: reads come
//! back empty, writes are accepted and dropped. It is what the API runs on
//! until a real backend is wired in.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{
    ImportRepository, LinkRepository, MediaRepository, PageRepository, Repositories,
    SettingsRepository, UserRepository, WidgetRepository,
};
use crate::models::{Link, Media, Page, SiteSettings, User, Widget};

#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedRepository;

impl DetachedRepository {
    pub fn new() -> Self {
        Self
    }

    /// One shared instance behind every repository handle
    pub fn repositories() -> Repositories {
        let repo = Arc::new(Self::new());
        Repositories {
            pages: repo.clone(),
            widgets: repo.clone(),
            media: repo.clone(),
            links: repo.clone(),
            settings: repo.clone(),
            users: repo.clone(),
            import: repo,
        }
    }
}

#[async_trait]
impl PageRepository for DetachedRepository {
    async fn create(&self, page: &Page) -> Result<()> {
        tracing::debug!("Detached repository: page {} not stored", page.id);
        Ok(())
    }

    async fn get_by_id(&self, _id: &str) -> Result<Option<Page>> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<Page>> {
        Ok(Vec::new())
    }

    async fn update(&self, page: &Page) -> Result<()> {
        tracing::debug!("Detached repository: page {} update dropped", page.id);
        Ok(())
    }

    async fn delete(&self, _id: &str) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl WidgetRepository for DetachedRepository {
    async fn create(&self, widget: &Widget) -> Result<()> {
        tracing::debug!("Detached repository: widget {} not stored", widget.id);
        Ok(())
    }

    async fn list_by_page(&self, _page_id: &str) -> Result<BTreeMap<String, Widget>> {
        Ok(BTreeMap::new())
    }

    async fn list_all(&self) -> Result<BTreeMap<String, Widget>> {
        Ok(BTreeMap::new())
    }

    async fn update(&self, widget: &Widget) -> Result<()> {
        tracing::debug!("Detached repository: widget {} update dropped", widget.id);
        Ok(())
    }

    async fn delete(&self, _id: &str) -> Result<()> {
        Ok(())
    }

    async fn reorder(&self, page_id: &str, widget_ids: &[String]) -> Result<()> {
        tracing::debug!(
            "Detached repository: order of {} widgets on page {} dropped",
            widget_ids.len(),
            page_id
        );
        Ok(())
    }
}

#[async_trait]
impl MediaRepository for DetachedRepository {
    async fn create(&self, media: &Media) -> Result<()> {
        tracing::debug!("Detached repository: media {} not stored", media.id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Media>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl LinkRepository for DetachedRepository {
    async fn create(&self, link: &Link) -> Result<()> {
        tracing::debug!("Detached repository: link {} not stored", link.id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Link>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl SettingsRepository for DetachedRepository {
    async fn get(&self) -> Result<Option<SiteSettings>> {
        Ok(None)
    }

    async fn save(&self, _settings: &SiteSettings) -> Result<()> {
        tracing::debug!("Detached repository: settings not stored");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for DetachedRepository {
    async fn list(&self) -> Result<Vec<User>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl ImportRepository for DetachedRepository {
    async fn import(&self, document: &Map<String, Value>) -> Result<()> {
        tracing::debug!(
            "Detached repository: import of {} sections dropped",
            document.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_are_not_retained() {
        let repos = DetachedRepository::repositories();
        let mut page = Page::new("Kept?");
        page.stamp_created(chrono::Utc::now());

        repos.pages.create(&page).await.unwrap();

        assert!(repos.pages.get_by_id(&page.id).await.unwrap().is_none());
        assert!(repos.pages.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reads_are_empty() {
        let repos = DetachedRepository::repositories();

        assert!(repos.widgets.list_by_page("p").await.unwrap().is_empty());
        assert!(repos.widgets.list_all().await.unwrap().is_empty());
        assert!(repos.media.list().await.unwrap().is_empty());
        assert!(repos.links.list().await.unwrap().is_empty());
        assert!(repos.users.list().await.unwrap().is_empty());
        assert!(repos.settings.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_writes_never_fail() {
        let repos = DetachedRepository::repositories();

        repos.settings.save(&SiteSettings::default()).await.unwrap();
        repos.widgets.reorder("p", &["a".to_string()]).await.unwrap();
        repos.widgets.delete("w").await.unwrap();
        repos.pages.delete("p").await.unwrap();
        repos.import.import(&Map::new()).await.unwrap();
    }
}
