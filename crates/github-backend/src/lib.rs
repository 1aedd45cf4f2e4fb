pub mod client;
mod convert;
pub mod error;
pub mod models;
mod trait_impl;

#[cfg(test)]
mod client_tests;

pub use client::GitHubClient;
pub use error::{GitHubError, Result};
pub use models::*;

// Re-export survey-core types for convenience
pub use survey_core::{RepositorySource, SurveyError};
