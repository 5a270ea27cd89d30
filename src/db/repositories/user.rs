//! User repository

use anyhow::Result;
use async_trait::async_trait;

use crate::models::User;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>>;
}
