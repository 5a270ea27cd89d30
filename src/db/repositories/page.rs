//! Page repository

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Page;

#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn create(&self, page: &Page) -> Result<()>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Page>>;
    async fn list(&self) -> Result<Vec<Page>>;
    async fn update(&self, page: &Page) -> Result<()>;
    async fn delete(&self, id: &str) -> Result<()>;
}
