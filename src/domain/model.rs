use serde::{Deserialize, Serialize};

/// Default GitHub REST API root.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Summary printed by the `repos` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoListing {
    pub org: String,
    pub license: Option<String>,
    pub repos: Vec<String>,
}
