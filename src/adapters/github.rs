use crate::adapters::http::HttpJsonSource;
use crate::domain::model::GITHUB_API_BASE;
use crate::domain::ports::JsonSource;
use crate::utils::error::{DrillError, Result};
use crate::utils::memoize::AsyncMemoized;
use crate::utils::nested_map::access_nested_map;
use serde_json::Value;
use std::sync::Arc;

/// Organization endpoint; `{base}` is the API root, `{org}` the organization login.
pub const ORG_URL: &str = "{base}/orgs/{org}";

/// Read-only client for a single GitHub organization.
///
/// Both the org payload and the repos payload are fetched at most once per client.
pub struct GithubOrgClient {
    org_name: String,
    base_url: String,
    source: Arc<dyn JsonSource>,
    org: AsyncMemoized<Value>,
    repos_payload: AsyncMemoized<Value>,
}

impl GithubOrgClient {
    pub fn new(org_name: impl Into<String>) -> Self {
        Self::with_source(org_name, Arc::new(HttpJsonSource::default()), GITHUB_API_BASE)
    }

    pub fn with_source(
        org_name: impl Into<String>,
        source: Arc<dyn JsonSource>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            org_name: org_name.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            source,
            org: AsyncMemoized::new(),
            repos_payload: AsyncMemoized::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn org_url(&self) -> String {
        ORG_URL
            .replace("{base}", &self.base_url)
            .replace("{org}", &self.org_name)
    }

    /// The organization payload.
    pub async fn org(&self) -> Result<&Value> {
        self.org
            .get_or_try_init(|| async {
                let url = self.org_url();
                tracing::info!("Fetching organization {}", self.org_name);
                self.source.get_json(&url).await
            })
            .await
    }

    /// The `repos_url` advertised by the organization payload.
    pub async fn public_repos_url(&self) -> Result<String> {
        let org = self.org().await?;
        let repos_url = access_nested_map(org, &["repos_url"])?;
        repos_url
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DrillError::ValidationError {
                message: format!("repos_url of {} is not a string", self.org_name),
            })
    }

    pub async fn repos_payload(&self) -> Result<&Value> {
        self.repos_payload
            .get_or_try_init(|| async {
                let url = self.public_repos_url().await?;
                tracing::info!("Fetching repositories of {}", self.org_name);
                self.source.get_json(&url).await
            })
            .await
    }

    /// Names of the organization's public repositories, optionally only those under `license`.
    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let payload = self.repos_payload().await?;
        let repos = payload.as_array().ok_or_else(|| DrillError::ValidationError {
            message: format!("repos payload of {} is not a list", self.org_name),
        })?;

        let names: Vec<String> = repos
            .iter()
            .filter(|repo| license.map_or(true, |key| Self::has_license(repo, key)))
            .filter_map(|repo| repo.get("name").and_then(Value::as_str))
            .map(str::to_string)
            .collect();

        tracing::debug!(
            "{} repositories matched (license filter: {:?})",
            names.len(),
            license
        );
        Ok(names)
    }

    /// 沒有 license 欄位的 repo 視為不符合，而不是錯誤。
    pub fn has_license(repo: &Value, license_key: &str) -> bool {
        match access_nested_map(repo, &["license", "key"]) {
            Ok(key) => key.as_str() == Some(license_key),
            Err(_) => false,
        }
    }
}
