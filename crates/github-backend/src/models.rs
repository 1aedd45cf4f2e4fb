use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// License as reported on a search result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubLicense {
    pub key: Option<String>,
    pub name: String,
    pub spdx_id: Option<String>,
}

/// Repository item from the search endpoint (only the fields we keep)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepository {
    pub name: String,
    pub full_name: Option<String>,
    pub html_url: String,
    pub description: Option<String>,
    pub stargazers_count: u64,
    pub forks: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    pub license: Option<GitHubLicense>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub pushed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Response body of `GET /search/repositories`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubRepositorySearch {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    pub items: Vec<GitHubRepository>,
}
