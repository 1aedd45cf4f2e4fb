use survey_core::SurveyError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for SurveyError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => SurveyError::Transport(e.to_string()),
            GitHubError::Parse(e) => SurveyError::Parse(e.to_string()),
            GitHubError::Unauthorized => SurveyError::Source {
                status: 401,
                message: "Authentication failed".to_string(),
            },
            GitHubError::RateLimited => SurveyError::Source {
                status: 403,
                message: "GitHub API rate limit exceeded".to_string(),
            },
            GitHubError::Api { status, message } => SurveyError::Source { status, message },
        }
    }
}
