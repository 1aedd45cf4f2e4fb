use crate::error::Result;
use crate::models::RepositoryRecord;
use crate::query::SearchRequest;

/// A remote source of repository search results.
///
/// Implementations request pages in increasing order and return every item
/// gathered, or the first error met. Partial results are never returned.
pub trait RepositorySource {
    /// Short human-readable name used in status messages
    fn name(&self) -> &str;

    fn search_repositories(&self, request: &SearchRequest) -> Result<Vec<RepositoryRecord>>;
}
