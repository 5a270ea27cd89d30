//! Link repository

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Link;

#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn create(&self, link: &Link) -> Result<()>;
    async fn list(&self) -> Result<Vec<Link>>;
}
