//! Keyword classification of repositories into categories.

use serde::{Deserialize, Serialize};

use crate::models::RepositoryRecord;

/// Synonym that needs word boundaries instead of substring matching
const SHORT_TOKEN: &str = "ai";

/// A named group of keyword synonyms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub synonyms: Vec<String>,
}

impl Category {
    pub fn new(name: &str, synonyms: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Categories analysed when none are configured
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::new("nocode", &["nocode", "no-code", "no code"]),
        Category::new("lowcode", &["lowcode", "low code", "low-code"]),
        Category::new("ai", &["ai", "artificial intelligence"]),
        Category::new("plantuml", &["plantuml", "plant uml", "plant-uml"]),
        Category::new(
            "ocl",
            &["ocl", "object-constraint-language", "object constraint language"],
        ),
    ]
}

/// Records split by whether they match a category. Both sides keep input order.
#[derive(Debug, Clone, Default)]
pub struct Partition<'a> {
    pub matching: Vec<&'a RepositoryRecord>,
    pub non_matching: Vec<&'a RepositoryRecord>,
}

/// Partition `records` by whether any of `synonyms` matches.
///
/// A synonym matches on a case-insensitive substring of the description or
/// name, or on a topic equal to it after trimming and lowercasing. The synonym
/// `ai` only matches text as ` ai ` or ` ai-`.
pub fn classify<'a, S: AsRef<str>>(
    records: &'a [RepositoryRecord],
    synonyms: &[S],
) -> Partition<'a> {
    let synonyms: Vec<String> = synonyms
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect();

    let mut partition = Partition::default();
    for record in records {
        if matches_any(record, &synonyms) {
            partition.matching.push(record);
        } else {
            partition.non_matching.push(record);
        }
    }
    partition
}

fn matches_any(record: &RepositoryRecord, synonyms: &[String]) -> bool {
    let description = record.description.as_deref().unwrap_or("").to_lowercase();
    let name = record.name.to_lowercase();
    let topics: Vec<String> = record
        .topics
        .iter()
        .map(|t| t.to_lowercase().trim().to_string())
        .collect();

    synonyms.iter().any(|synonym| {
        text_matches(&description, synonym)
            || text_matches(&name, synonym)
            || topics.iter().any(|topic| topic == synonym)
    })
}

fn text_matches(text: &str, synonym: &str) -> bool {
    if synonym == SHORT_TOKEN {
        text.contains(" ai ") || text.contains(" ai-")
    } else {
        text.contains(synonym)
    }
}

/// Matching record summary shown in category reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryMatch {
    pub name: String,
    pub description: Option<String>,
    pub stars: u64,
}

/// Counts and matches for one category
#[derive(Debug, Clone, Serialize)]
pub struct CategoryReport {
    pub category: String,
    pub total: usize,
    pub matching_count: usize,
    pub non_matching_count: usize,
    pub matches: Vec<CategoryMatch>,
}

pub fn analyze(records: &[RepositoryRecord], category: &Category) -> CategoryReport {
    let partition = classify(records, &category.synonyms);

    CategoryReport {
        category: category.name.clone(),
        total: records.len(),
        matching_count: partition.matching.len(),
        non_matching_count: partition.non_matching.len(),
        matches: partition
            .matching
            .iter()
            .map(|r| CategoryMatch {
                name: r.name.clone(),
                description: r.description.clone(),
                stars: r.stargazers_count,
            })
            .collect(),
    }
}
