use std::time::Duration;
use survey_core::SearchRequest;
use tracing::debug;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub REST API client for repository search
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl GitHubClient {
    /// Create an anonymous client targeting api.github.com
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, None, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL (for GitHub Enterprise or testing)
    pub fn with_base_url(base_url: &str, token: Option<&str>, timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(str::to_string),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for one page of a repository search
    fn search_url(&self, request: &SearchRequest, page: usize) -> String {
        format!(
            "{}/search/repositories?q={}&sort={}&order={}&per_page={}&page={}",
            self.base_url,
            urlencoding::encode(&request.query.to_q()),
            urlencoding::encode(&request.sort),
            request.order,
            request.per_page,
            page
        )
    }

    /// Check response status and return error unless it is 200 OK
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if status == 200 {
            return Ok(response);
        }

        // 403 with an exhausted quota means rate limited
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        // GitHub error bodies carry a "message" field
        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        if status == 401 {
            Err(GitHubError::Unauthorized)
        } else {
            Err(GitHubError::Api { status, message })
        }
    }

    /// Fetch one page of repository search results
    pub fn search_repositories_page(
        &self,
        request: &SearchRequest,
        page: usize,
    ) -> Result<GitHubRepositorySearch> {
        let url = self.search_url(request, page);
        debug!(%url, page, "searching repositories");

        let mut call = self
            .agent
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        if let Some(token) = &self.token {
            call = call.header("Authorization", &format!("Bearer {}", token));
        }
        let response = call.call().map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        let body = response.body_mut().read_to_string()?;
        let result: GitHubRepositorySearch = serde_json::from_str(&body)?;
        Ok(result)
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}
