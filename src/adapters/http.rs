use crate::domain::ports::JsonSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("drillbox/", env!("CARGO_PKG_VERSION"));

/// GET `url` and decode the body as JSON.
pub async fn get_json(client: &Client, url: &str) -> Result<Value> {
    tracing::debug!("Making API request to: {}", url);
    let response = client.get(url).send().await?;

    tracing::debug!("API response status: {}", response.status());
    let response = response.error_for_status()?;

    let payload: Value = response.json().await?;
    Ok(payload)
}

/// reqwest 實作的 [`JsonSource`]。
#[derive(Debug, Clone)]
pub struct HttpJsonSource {
    client: Client,
}

impl HttpJsonSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// GitHub 要求每個請求都帶 User-Agent。
    pub fn with_settings(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }
}

impl Default for HttpJsonSource {
    fn default() -> Self {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::new(client)
    }
}

#[async_trait]
impl JsonSource for HttpJsonSource {
    async fn get_json(&self, url: &str) -> Result<Value> {
        get_json(&self.client, url).await
    }
}
