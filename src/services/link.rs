//! Link service

use anyhow::{Context, Result};
use chrono::Utc;
use std::sync::Arc;

use crate::db::repositories::LinkRepository;
use crate::models::Link;

pub struct LinkService {
    repo: Arc<dyn LinkRepository>,
}

impl LinkService {
    pub fn new(repo: Arc<dyn LinkRepository>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Link>> {
        self.repo.list().await.context("Failed to list links")
    }

    pub async fn create(&self, mut link: Link) -> Result<Link> {
        link.stamp_created(Utc::now());
        self.repo.create(&link).await.context("Failed to create link")?;
        tracing::info!("Link created: {} -> {}", link.id, link.url);
        Ok(link)
    }
}
