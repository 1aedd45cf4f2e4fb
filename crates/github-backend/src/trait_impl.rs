//! Implementation of survey-core traits for GitHubClient

use survey_core::{fetch_pages, RepositoryRecord, RepositorySource, Result, SearchRequest, SurveyError};
use tracing::info;

use crate::client::GitHubClient;
use crate::convert::github_repo_to_core;

impl RepositorySource for GitHubClient {
    fn name(&self) -> &str {
        "GitHub API"
    }

    fn search_repositories(&self, request: &SearchRequest) -> Result<Vec<RepositoryRecord>> {
        let items = fetch_pages(request.max_pages, |page| {
            self.search_repositories_page(request, page)
                .map(|result| result.items)
        })
        .map_err(SurveyError::from)?;

        info!(count = items.len(), query = %request.query.to_q(), "repository search finished");
        Ok(items.into_iter().map(github_repo_to_core).collect())
    }
}
