//! Conversion between snapshot table rows and [`RepositoryRecord`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NormalizeError;
use crate::models::{License, RepositoryRecord};

pub const NO_LANGUAGE: &str = "No language";
pub const NO_LICENSE: &str = "No license";
pub const NO_DESCRIPTION: &str = "No description";

/// Suffix that turns a snapshot date into a full UTC timestamp
pub const MIDNIGHT_UTC: &str = "T00:00:00Z";

/// Display tables cut descriptions to this many characters
pub const DESCRIPTION_DISPLAY_CHARS: usize = 200;

/// Snapshot column names, in file order
pub const COLUMNS: [&str; 11] = [
    "Name",
    "Stars⭐",
    "Last Updated",
    "First Commit",
    "URL",
    "Forks",
    "Issues",
    "Language",
    "License",
    "Description",
    "Topics",
];

/// One row of the snapshot table, every column kept as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Stars⭐")]
    pub stars: String,
    #[serde(rename = "Last Updated")]
    pub last_updated: String,
    #[serde(rename = "First Commit")]
    pub first_commit: String,
    #[serde(rename = "URL")]
    pub url: String,
    #[serde(rename = "Forks")]
    pub forks: String,
    #[serde(rename = "Issues")]
    pub issues: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "License")]
    pub license: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Topics")]
    pub topics: String,
}

impl TableRow {
    /// Project a record back into snapshot shape, using sentinels for absent values
    pub fn from_record(record: &RepositoryRecord) -> Self {
        Self {
            name: record.name.clone(),
            stars: record.stargazers_count.to_string(),
            last_updated: record.pushed_date().format("%Y-%m-%d").to_string(),
            first_commit: record.created_date().format("%Y-%m-%d").to_string(),
            url: record.html_url.clone(),
            forks: record.forks.to_string(),
            issues: record.open_issues.to_string(),
            language: record
                .language
                .clone()
                .unwrap_or_else(|| NO_LANGUAGE.to_string()),
            license: record
                .license_name()
                .unwrap_or(NO_LICENSE)
                .to_string(),
            description: record
                .description
                .clone()
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            topics: record.topics.join(","),
        }
    }

    /// Like [`TableRow::from_record`], with the description cut for display
    pub fn for_display(record: &RepositoryRecord) -> Self {
        let mut row = Self::from_record(record);
        if row.description.chars().count() > DESCRIPTION_DISPLAY_CHARS {
            row.description = row
                .description
                .chars()
                .take(DESCRIPTION_DISPLAY_CHARS)
                .collect();
        }
        row
    }

    /// Cells in [`COLUMNS`] order
    pub fn cells(&self) -> [&str; 11] {
        [
            &self.name,
            &self.stars,
            &self.last_updated,
            &self.first_commit,
            &self.url,
            &self.forks,
            &self.issues,
            &self.language,
            &self.license,
            &self.description,
            &self.topics,
        ]
    }
}

/// Convert one snapshot row into the canonical record shape.
///
/// Pure: the same row always yields the same record.
pub fn normalize_row(row: &TableRow) -> Result<RepositoryRecord, NormalizeError> {
    if row.name.is_empty() {
        return Err(NormalizeError::Empty { column: "Name" });
    }

    Ok(RepositoryRecord {
        name: row.name.clone(),
        stargazers_count: parse_count("Stars⭐", &row.stars)?,
        pushed_at: parse_date("Last Updated", &row.last_updated)?,
        created_at: parse_date("First Commit", &row.first_commit)?,
        html_url: row.url.clone(),
        forks: parse_count("Forks", &row.forks)?,
        open_issues: parse_count("Issues", &row.issues)?,
        language: match row.language.as_str() {
            "" | NO_LANGUAGE => None,
            other => Some(other.to_string()),
        },
        license: if row.license == NO_LICENSE {
            None
        } else {
            Some(License::new(row.license.clone()))
        },
        description: if row.description == NO_DESCRIPTION {
            None
        } else {
            Some(row.description.clone())
        },
        // Fragments are kept verbatim; the classifier trims and lowercases
        topics: if row.topics.is_empty() {
            Vec::new()
        } else {
            row.topics.split(',').map(str::to_string).collect()
        },
    })
}

fn parse_count(column: &'static str, value: &str) -> Result<u64, NormalizeError> {
    value
        .trim()
        .parse()
        .map_err(|_| NormalizeError::InvalidNumber {
            column,
            value: value.to_string(),
        })
}

fn parse_date(column: &'static str, value: &str) -> Result<DateTime<Utc>, NormalizeError> {
    let stamp = format!("{}{}", value.trim(), MIDNIGHT_UTC);
    stamp
        .parse::<DateTime<Utc>>()
        .map_err(|_| NormalizeError::InvalidDate {
            column,
            value: value.to_string(),
        })
}
