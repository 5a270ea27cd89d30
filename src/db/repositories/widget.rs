//! Widget repository

use anyhow::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;

use crate::models::Widget;

#[async_trait]
pub trait WidgetRepository: Send + Sync {
    async fn create(&self, widget: &Widget) -> Result<()>;
    /// Widgets of one page keyed by widget id
    async fn list_by_page(&self, page_id: &str) -> Result<BTreeMap<String, Widget>>;
    async fn list_all(&self) -> Result<BTreeMap<String, Widget>>;
    async fn update(&self, widget: &Widget) -> Result<()>;
    async fn delete(&self, id: &str) -> Result<()>;
    /// Persist `widget_ids` as the display order of the page's widgets
    async fn reorder(&self, page_id: &str, widget_ids: &[String]) -> Result<()>;
}
