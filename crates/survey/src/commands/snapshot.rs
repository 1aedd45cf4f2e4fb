use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use survey_core::snapshot::write_snapshot;
use survey_core::RepositorySource;

use crate::cli::OutputFormat;
use crate::commands::client_for;
use crate::config::Config;

/// Refresh the snapshot file from the remote source. The fallback is never used here.
pub fn handle_snapshot(
    config: &Config,
    output: Option<PathBuf>,
    format: OutputFormat,
    now: DateTime<Utc>,
) -> Result<()> {
    let client = client_for(config);
    let request = config.search_request(now);

    let records = client
        .search_repositories(&request)
        .with_context(|| format!("Failed to fetch repositories from {}", config.api_url))?;
    if records.is_empty() {
        return Err(anyhow!(
            "Search returned no repositories; snapshot not written"
        ));
    }

    let path = output.unwrap_or_else(|| config.snapshot.clone());
    write_snapshot(&path, &records)
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::json!({
                "success": true,
                "path": path.display().to_string(),
                "count": records.len(),
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Text => {
            println!(
                "Wrote {} repositories to {}",
                records.len(),
                path.display()
            );
        }
    }
    Ok(())
}
