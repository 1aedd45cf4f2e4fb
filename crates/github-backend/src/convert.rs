//! Model conversions from GitHub types to survey-core types

use survey_core::{License, RepositoryRecord};

use crate::models::GitHubRepository;

/// Convert a search item to a RepositoryRecord.
///
/// Search items already carry the canonical fields, so this only moves them.
pub fn github_repo_to_core(repo: GitHubRepository) -> RepositoryRecord {
    RepositoryRecord {
        name: repo.name,
        stargazers_count: repo.stargazers_count,
        pushed_at: repo.pushed_at,
        created_at: repo.created_at,
        html_url: repo.html_url,
        forks: repo.forks,
        open_issues: repo.open_issues,
        language: repo.language,
        license: repo.license.map(|l| License::new(l.name)),
        description: repo.description,
        topics: repo.topics,
    }
}
