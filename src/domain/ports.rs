use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Anything that can turn a URL into a decoded JSON document.
#[async_trait]
pub trait JsonSource: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}
