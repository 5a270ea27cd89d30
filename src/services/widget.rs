//! Widget service

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::db::repositories::WidgetRepository;
use crate::models::{Widget, WidgetType};

/// Catalog entry describing one insertable widget type
#[derive(Debug, Clone, Serialize)]
pub struct WidgetTypeInfo {
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    pub props: Map<String, Value>,
}

pub struct WidgetService {
    repo: Arc<dyn WidgetRepository>,
}

impl WidgetService {
    pub fn new(repo: Arc<dyn WidgetRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, mut widget: Widget) -> Result<Widget> {
        widget.stamp_created(Utc::now());
        self.repo.create(&widget).await.context("Failed to create widget")?;
        tracing::info!(
            "Widget created: {} ({}) on page {}",
            widget.id,
            widget.widget_type,
            widget.page_id
        );
        Ok(widget)
    }

    pub async fn update(&self, id: &str, mut widget: Widget) -> Result<Widget> {
        widget.stamp_updated(id, Utc::now());
        self.repo.update(&widget).await.context("Failed to update widget")?;
        tracing::info!("Widget updated: {}", widget.id);
        Ok(widget)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.repo.delete(id).await.context("Failed to delete widget")?;
        tracing::info!("Widget deleted: {}", id);
        Ok(())
    }

    /// Every known widget type with its default props
    pub fn catalog(&self) -> Vec<WidgetTypeInfo> {
        WidgetType::ALL
            .into_iter()
            .map(|widget_type| WidgetTypeInfo {
                widget_type,
                props: widget_type.default_props(),
            })
            .collect()
    }
}
