pub mod analyze;
pub mod snapshot;
pub mod stats;
pub mod table;

use anyhow::Result;
use chrono::{DateTime, Utc};
use github_backend::GitHubClient;
use survey_core::{fetch_with_fallback, Session, StatusMessage};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::output::ConsoleSink;

/// Session plus the status messages raised while loading it
pub struct Loaded {
    pub session: Session,
    pub signals: Vec<StatusMessage>,
}

/// Fetch repositories (falling back to the snapshot) and start a session
pub fn load_session(config: &Config, format: OutputFormat, now: DateTime<Utc>) -> Result<Loaded> {
    let client = client_for(config);
    let request = config.search_request(now);
    let mut sink = ConsoleSink::new(format);
    debug!(api_url = %config.api_url, snapshot = %config.snapshot.display(), "loading repositories");

    let report = match fetch_with_fallback(&client, &request, &config.snapshot, &mut sink) {
        Ok(report) => report,
        Err(e) => {
            sink.flush_unreported();
            return Err(e.into());
        }
    };

    Ok(Loaded {
        session: Session::new(report, &config.excluded, now.date_naive()),
        signals: sink.into_messages(),
    })
}

pub fn client_for(config: &Config) -> GitHubClient {
    GitHubClient::with_base_url(&config.api_url, config.token.as_deref(), config.timeout())
}
