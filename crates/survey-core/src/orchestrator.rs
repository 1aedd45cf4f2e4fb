//! Remote fetch with snapshot fallback.

use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::error::{Result, SnapshotError, SurveyError};
use crate::models::RepositoryRecord;
use crate::query::SearchRequest;
use crate::snapshot::read_snapshot;
use crate::source::RepositorySource;
use crate::status::StatusSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOutcome {
    RemoteOk,
    RemoteFailedFallbackOk,
    RemoteFailedFallbackUnavailable,
}

impl FetchOutcome {
    /// True when the remote search did not supply the records
    pub fn used_fallback(&self) -> bool {
        !matches!(self, FetchOutcome::RemoteOk)
    }
}

/// Result of one orchestrated fetch. Records come from exactly one path.
#[derive(Debug, Clone, Serialize)]
pub struct FetchReport {
    pub outcome: FetchOutcome,
    pub records: Vec<RepositoryRecord>,
}

/// Fetch repositories from `source`, falling back to the snapshot at `snapshot`.
///
/// A failed search and a search that yields zero items both trigger the
/// fallback. When the fallback is used, `status` receives an error for the
/// remote failure, a warning about the fallback and an info with the record
/// count, in that order. A missing snapshot yields an empty report; a
/// malformed one is returned as an error.
pub fn fetch_with_fallback(
    source: &dyn RepositorySource,
    request: &SearchRequest,
    snapshot: &Path,
    status: &mut dyn StatusSink,
) -> Result<FetchReport> {
    let remote_failure = match source.search_repositories(request) {
        Ok(records) if !records.is_empty() => {
            info!(source = source.name(), count = records.len(), "remote fetch succeeded");
            return Ok(FetchReport {
                outcome: FetchOutcome::RemoteOk,
                records,
            });
        }
        Ok(_) => format!("{} search returned no repositories", source.name()),
        Err(e) => format!("{} search failed: {}", source.name(), e),
    };

    info!(reason = %remote_failure, snapshot = %snapshot.display(), "falling back to snapshot");
    status.error(&remote_failure);

    match read_snapshot(snapshot) {
        Ok(records) => {
            status.warning(&format!(
                "{} is unavailable. Loading data from {} instead.",
                source.name(),
                snapshot.display()
            ));
            status.info(&format!(
                "Loaded {} repositories from snapshot data.",
                records.len()
            ));
            Ok(FetchReport {
                outcome: FetchOutcome::RemoteFailedFallbackOk,
                records,
            })
        }
        Err(SnapshotError::Missing(path)) => {
            status.error(&format!(
                "{} failed and no snapshot file was found at {}.",
                source.name(),
                path.display()
            ));
            Ok(FetchReport {
                outcome: FetchOutcome::RemoteFailedFallbackUnavailable,
                records: Vec::new(),
            })
        }
        Err(e) => Err(SurveyError::Snapshot(e)),
    }
}
