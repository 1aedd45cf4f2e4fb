//! Aggregate statistics over a set of repositories.

use chrono::Datelike;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::models::RepositoryRecord;

/// Number of repositories per first-commit year, ascending by year
pub fn first_commit_years<'a, I>(records: I) -> BTreeMap<i32, usize>
where
    I: IntoIterator<Item = &'a RepositoryRecord>,
{
    let mut years = BTreeMap::new();
    for record in records {
        *years.entry(record.created_date().year()).or_insert(0) += 1;
    }
    years
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: usize,
}

/// Repositories per language, most common first. Records without a language are skipped.
pub fn language_counts<'a, I>(records: I) -> Vec<LanguageCount>
where
    I: IntoIterator<Item = &'a RepositoryRecord>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        if let Some(language) = record.language.as_deref() {
            *counts.entry(language).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<LanguageCount> = counts
        .into_iter()
        .map(|(language, count)| LanguageCount {
            language: language.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.language.cmp(&b.language)));
    counts
}

/// Five-number summary of star counts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StarSummary {
    pub count: usize,
    pub min: u64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: u64,
}

pub fn star_summary<'a, I>(records: I) -> Option<StarSummary>
where
    I: IntoIterator<Item = &'a RepositoryRecord>,
{
    let mut stars: Vec<u64> = records.into_iter().map(|r| r.stargazers_count).collect();
    if stars.is_empty() {
        return None;
    }
    stars.sort_unstable();

    Some(StarSummary {
        count: stars.len(),
        min: stars[0],
        lower_quartile: quantile(&stars, 0.25),
        median: quantile(&stars, 0.5),
        upper_quartile: quantile(&stars, 0.75),
        max: stars[stars.len() - 1],
    })
}

/// Linear-interpolated quantile of sorted, non-empty values
fn quantile(sorted: &[u64], q: f64) -> f64 {
    let pos = (sorted.len() - 1) as f64 * q;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let weight = pos - lower as f64;
    sorted[lower] as f64 * (1.0 - weight) + sorted[upper] as f64 * weight
}
