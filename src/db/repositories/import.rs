//! Bulk import sink

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Map, Value};

#[async_trait]
pub trait ImportRepository: Send + Sync {
    /// Hand over an export document as received from the client
    async fn import(&self, document: &Map<String, Value>) -> Result<()>;
}
