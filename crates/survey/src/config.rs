use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use github_backend::client::DEFAULT_BASE_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use survey_core::filter::{RepositoryFilter, DEFAULT_EXCLUDED};
use survey_core::query::{
    DEFAULT_ACTIVE_DAYS, DEFAULT_MAX_PAGES, DEFAULT_MIN_STARS, DEFAULT_PER_PAGE, DEFAULT_QUERY,
    DEFAULT_SORT,
};
use survey_core::{builtin_categories, Category, SearchQuery, SearchRequest, SortOrder};

const LOCAL_CONFIG_FILE: &str = "survey.toml";

/// Upper bound for `active_days`; keeps the activity window inside chrono's date range
pub const MAX_ACTIVE_DAYS: i64 = 36_500;

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub api_url: String,
    pub token: Option<String>,
    pub query: String,
    pub sort: String,
    pub order: SortOrder,
    pub per_page: usize,
    pub max_pages: usize,
    pub min_stars: u64,
    pub active_days: i64,
    pub timeout_secs: u64,
    pub snapshot: PathBuf,
    pub excluded: Vec<String>,
    pub categories: Vec<Category>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            query: DEFAULT_QUERY.to_string(),
            sort: DEFAULT_SORT.to_string(),
            order: SortOrder::Desc,
            per_page: DEFAULT_PER_PAGE,
            max_pages: DEFAULT_MAX_PAGES,
            min_stars: DEFAULT_MIN_STARS,
            active_days: DEFAULT_ACTIVE_DAYS,
            timeout_secs: 10,
            snapshot: PathBuf::from("snapshot.csv"),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            categories: builtin_categories(),
        }
    }
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        for path in config_paths(explicit_path) {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed("SURVEY_"));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(
        &mut self,
        cli_api_url: Option<String>,
        cli_token: Option<String>,
        cli_snapshot: Option<PathBuf>,
    ) {
        if let Some(url) = cli_api_url {
            self.api_url = url;
        }
        if let Some(token) = cli_token {
            self.token = Some(token);
        }
        if let Some(snapshot) = cli_snapshot {
            self.snapshot = snapshot;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.per_page) {
            return Err(anyhow!(
                "per_page must be between 1 and 100, got {}",
                self.per_page
            ));
        }
        if self.max_pages == 0 {
            return Err(anyhow!("max_pages must be at least 1"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be at least 1"));
        }
        if !(0..=MAX_ACTIVE_DAYS).contains(&self.active_days) {
            return Err(anyhow!(
                "active_days must be between 0 and {}, got {}",
                MAX_ACTIVE_DAYS,
                self.active_days
            ));
        }
        if self.api_url.trim().is_empty() {
            return Err(anyhow!(
                "API URL not configured. Set via --api-url, SURVEY_API_URL env var, or config file"
            ));
        }
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }

    /// Search request for repositories active in the last `active_days` before `now`
    pub fn search_request(&self, now: DateTime<Utc>) -> SearchRequest {
        SearchRequest {
            query: SearchQuery::active_since(&self.query, self.min_stars, self.active_days, now),
            sort: self.sort.clone(),
            order: self.order,
            per_page: self.per_page,
            max_pages: self.max_pages,
        }
    }

    /// Table filter with the configured thresholds, optionally overridden
    pub fn filter(
        &self,
        today: NaiveDate,
        min_stars: Option<u64>,
        since: Option<NaiveDate>,
    ) -> RepositoryFilter {
        RepositoryFilter {
            min_stars: min_stars.unwrap_or(self.min_stars),
            pushed_since: since.unwrap_or(today - Duration::days(self.active_days)),
        }
    }

    /// Look up categories by name; all configured categories when `names` is empty
    pub fn select_categories(&self, names: &[String]) -> Result<Vec<Category>> {
        if names.is_empty() {
            return Ok(self.categories.clone());
        }

        names
            .iter()
            .map(|name| {
                self.categories
                    .iter()
                    .find(|c| c.name.eq_ignore_ascii_case(name))
                    .cloned()
                    .ok_or_else(|| {
                        let known: Vec<&str> =
                            self.categories.iter().map(|c| c.name.as_str()).collect();
                        anyhow!(
                            "Unknown category '{}'. Known categories: {}",
                            name,
                            known.join(", ")
                        )
                    })
            })
            .collect()
    }
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(path) = explicit {
        paths.push(path.to_path_buf());
        return paths;
    }

    if let Some(path) = get_project_config_path() {
        push_unique(&mut paths, path);
    }
    if let Some(path) = get_local_config_path() {
        push_unique(&mut paths, path);
    }

    paths
}

fn push_unique(paths: &mut Vec<PathBuf>, path: PathBuf) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

fn get_project_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "survey").map(|d| d.config_dir().join("config.toml"))
}

fn get_local_config_path() -> Option<PathBuf> {
    std::env::current_dir()
        .ok()
        .map(|dir| dir.join(LOCAL_CONFIG_FILE))
}
