//! Page service

use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::db::repositories::{PageRepository, WidgetRepository};
use crate::models::{Page, Widget};

pub struct PageService {
    repo: Arc<dyn PageRepository>,
    widgets: Arc<dyn WidgetRepository>,
}

impl PageService {
    pub fn new(repo: Arc<dyn PageRepository>, widgets: Arc<dyn WidgetRepository>) -> Self {
        Self { repo, widgets }
    }

    pub async fn list(&self) -> Result<Vec<Page>> {
        self.repo.list().await.context("Failed to list pages")
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Page>> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, mut page: Page) -> Result<Page> {
        page.stamp_created(Utc::now());
        self.repo.create(&page).await.context("Failed to create page")?;
        tracing::info!("Page created: {} ({})", page.id, page.slug);
        Ok(page)
    }

    pub async fn update(&self, id: &str, mut page: Page) -> Result<Page> {
        page.stamp_updated(id, Utc::now());
        self.repo.update(&page).await.context("Failed to update page")?;
        tracing::info!("Page updated: {}", page.id);
        Ok(page)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete(id).await.context("Failed to delete page")?;
        tracing::info!("Page deleted: {}", id);
        Ok(())
    }

    /// Widgets placed on the page, keyed by widget id
    pub async fn widgets(&self, page_id: &str) -> Result<BTreeMap<String, Widget>> {
        self.widgets
            .list_by_page(page_id)
            .await
            .context("Failed to list page widgets")
    }

    /// Store `widget_ids` as the page's widget order exactly as given
    pub async fn reorder_widgets(&self, page_id: &str, widget_ids: &[String]) -> Result<()> {
        self.widgets
            .reorder(page_id, widget_ids)
            .await
            .context("Failed to reorder widgets")?;
        tracing::info!("Widgets reordered on page {}: {} ids", page_id, widget_ids.len());
        Ok(())
    }
}
