use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Canonical repository record shared by the remote and snapshot paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub stargazers_count: u64,
    /// Last push to any branch
    pub pushed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub html_url: String,
    pub forks: u64,
    pub open_issues: u64,
    pub language: Option<String>,
    pub license: Option<License>,
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

impl RepositoryRecord {
    pub fn pushed_date(&self) -> NaiveDate {
        self.pushed_at.date_naive()
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn license_name(&self) -> Option<&str> {
        self.license.as_ref().map(|l| l.name.as_str())
    }
}

/// License reference (only the display name is kept)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    pub name: String,
}

impl License {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
