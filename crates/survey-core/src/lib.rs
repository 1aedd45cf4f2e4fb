pub mod classify;
pub mod error;
pub mod filter;
pub mod models;
pub mod normalize;
pub mod orchestrator;
pub mod pagination;
pub mod query;
pub mod session;
pub mod snapshot;
pub mod source;
pub mod stats;
pub mod status;

pub use classify::{analyze, builtin_categories, classify, Category, CategoryReport, Partition};
pub use error::{NormalizeError, Result, SnapshotError, SurveyError};
pub use models::*;
pub use orchestrator::{fetch_with_fallback, FetchOutcome, FetchReport};
pub use pagination::fetch_pages;
pub use query::{SearchQuery, SearchRequest, SortOrder};
pub use session::Session;
pub use source::RepositorySource;
pub use status::{RecordingSink, Severity, StatusMessage, StatusSink};
