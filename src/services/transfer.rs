//! Export / import of the whole content set

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::db::Repositories;
use crate::models::ContentSnapshot;

/// Format used when the client does not ask for one
pub const DEFAULT_EXPORT_FORMAT: &str = "json";

pub struct TransferService {
    repos: Repositories,
}

impl TransferService {
    pub fn new(repos: Repositories) -> Self {
        Self { repos }
    }

    /// Gather every collection into one snapshot
    pub async fn export(&self) -> Result<ContentSnapshot> {
        let snapshot = ContentSnapshot {
            pages: self.repos.pages.list().await.context("Failed to export pages")?,
            widgets: self.repos.widgets.list_all().await.context("Failed to export widgets")?,
            media: self.repos.media.list().await.context("Failed to export media")?,
            links: self.repos.links.list().await.context("Failed to export links")?,
            users: self.repos.users.list().await.context("Failed to export users")?,
            settings: self.repos.settings.get().await.context("Failed to export settings")?,
        };
        tracing::info!(
            "Exported {} pages, {} widgets, {} media, {} links",
            snapshot.pages.len(),
            snapshot.widgets.len(),
            snapshot.media.len(),
            snapshot.links.len()
        );
        Ok(snapshot)
    }

    /// Pass a client supplied export document to storage as-is
    pub async fn import(&self, document: &Map<String, Value>) -> Result<()> {
        self.repos
            .import
            .import(document)
            .await
            .context("Failed to import data")?;
        tracing::info!("Imported document with {} top-level keys", document.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DetachedRepository;

    #[tokio::test]
    async fn test_export_is_empty_without_storage() {
        let svc = TransferService::new(DetachedRepository::repositories());
        let snapshot = svc.export().await.unwrap();

        assert!(snapshot.pages.is_empty());
        assert!(snapshot.widgets.is_empty());
        assert!(snapshot.media.is_empty());
        assert!(snapshot.links.is_empty());
        assert!(snapshot.users.is_empty());
        assert!(snapshot.settings.is_none());
    }
}
