use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_QUERY: &str = "uml";
pub const DEFAULT_SORT: &str = "stars";
pub const DEFAULT_PER_PAGE: usize = 100;
pub const DEFAULT_MAX_PAGES: usize = 10;
pub const DEFAULT_MIN_STARS: u64 = 50;
pub const DEFAULT_ACTIVE_DAYS: i64 = 365;

/// Free-text search plus the star and activity qualifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub min_stars: u64,
    pub pushed_since: NaiveDate,
}

impl SearchQuery {
    /// Query for repositories pushed within `active_days` of `now`
    pub fn active_since(
        text: impl Into<String>,
        min_stars: u64,
        active_days: i64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            text: text.into(),
            min_stars,
            pushed_since: (now - Duration::days(active_days)).date_naive(),
        }
    }

    /// Render the `q` parameter, e.g. `uml stars:>=50 pushed:>=2024-01-31`
    pub fn to_q(&self) -> String {
        format!(
            "{} stars:>={} pushed:>={}",
            self.text,
            self.min_stars,
            self.pushed_since.format("%Y-%m-%d")
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the paginated fetch needs for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: SearchQuery,
    pub sort: String,
    pub order: SortOrder,
    pub per_page: usize,
    pub max_pages: usize,
}

impl SearchRequest {
    pub fn new(query: SearchQuery) -> Self {
        Self {
            query,
            sort: DEFAULT_SORT.to_string(),
            order: SortOrder::Desc,
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}
