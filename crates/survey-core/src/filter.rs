use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

use crate::models::RepositoryRecord;
use crate::query::{DEFAULT_ACTIVE_DAYS, DEFAULT_MIN_STARS};

/// Repositories that match the search but are not modeling tools
pub const DEFAULT_EXCLUDED: &[&str] = &[
    "awesome-low-level-design",
    "Books-Free-Books",
    "awesome-diagramming",
    "plantuml-examples",
    "hogwarts-artifacts-online",
    "-Enterprise-Architect-16-Crack-renewal-",
    "UoM-Applied-Informatics",
    "UML-Best-Practices",
    "design-pattern-examples-in-python",
    "design-pattern-examples-in-crystal",
    "FreeTakServer",
    "plantuml-icon-font-sprites",
    "snow-owl",
    "StarUML-CrackedAndTranslate",
    "tiro-notes",
    "QuickUMLS",
];

/// Drop records whose name is in `excluded`, keeping the rest in order
pub fn exclude_names<S: AsRef<str>>(
    records: Vec<RepositoryRecord>,
    excluded: &[S],
) -> Vec<RepositoryRecord> {
    let excluded: HashSet<&str> = excluded.iter().map(|s| s.as_ref()).collect();
    records
        .into_iter()
        .filter(|r| !excluded.contains(r.name.as_str()))
        .collect()
}

/// Minimum popularity and activity a record needs to be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepositoryFilter {
    pub min_stars: u64,
    pub pushed_since: NaiveDate,
}

impl RepositoryFilter {
    /// Default thresholds relative to `today`
    pub fn defaults(today: NaiveDate) -> Self {
        Self {
            min_stars: DEFAULT_MIN_STARS,
            pushed_since: today - Duration::days(DEFAULT_ACTIVE_DAYS),
        }
    }

    pub fn accepts(&self, record: &RepositoryRecord) -> bool {
        record.stargazers_count >= self.min_stars && record.pushed_date() >= self.pushed_since
    }

    pub fn apply<'a>(&self, records: &'a [RepositoryRecord]) -> Vec<&'a RepositoryRecord> {
        records.iter().filter(|r| self.accepts(r)).collect()
    }
}
