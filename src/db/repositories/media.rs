//! Media repository

use anyhow::Result;
use async_trait::async_trait;

use crate::models::Media;

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn create(&self, media: &Media) -> Result<()>;
    async fn list(&self) -> Result<Vec<Media>>;
}
