use chrono::NaiveDate;

use crate::filter::{exclude_names, RepositoryFilter};
use crate::models::RepositoryRecord;
use crate::orchestrator::{FetchOutcome, FetchReport};

/// Records of one fetch, owned by the caller for the rest of its run
#[derive(Debug, Clone)]
pub struct Session {
    pub today: NaiveDate,
    pub outcome: FetchOutcome,
    records: Vec<RepositoryRecord>,
}

impl Session {
    /// Start a session from a fetch report, dropping excluded repositories
    pub fn new<S: AsRef<str>>(report: FetchReport, excluded: &[S], today: NaiveDate) -> Self {
        Self {
            today,
            outcome: report.outcome,
            records: exclude_names(report.records, excluded),
        }
    }

    pub fn records(&self) -> &[RepositoryRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Default table filter relative to the session's `today`
    pub fn default_filter(&self) -> RepositoryFilter {
        RepositoryFilter::defaults(self.today)
    }

    pub fn filtered(&self, filter: &RepositoryFilter) -> Vec<&RepositoryRecord> {
        filter.apply(&self.records)
    }
}
