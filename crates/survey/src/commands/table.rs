use anyhow::Result;
use chrono::NaiveDate;
use colored::Colorize;
use serde::Serialize;
use survey_core::normalize::TableRow;
use survey_core::{FetchOutcome, StatusMessage};

use crate::cli::OutputFormat;
use crate::commands::Loaded;
use crate::config::Config;
use crate::output::Displayable;

#[derive(Serialize)]
struct TableReport {
    outcome: FetchOutcome,
    signals: Vec<StatusMessage>,
    count: usize,
    rows: Vec<TableRow>,
}

pub fn handle_table(
    loaded: Loaded,
    config: &Config,
    min_stars: Option<u64>,
    since: Option<NaiveDate>,
    format: OutputFormat,
) -> Result<()> {
    let session = &loaded.session;
    let filter = config.filter(session.today, min_stars, since);
    let rows: Vec<TableRow> = session
        .filtered(&filter)
        .into_iter()
        .map(TableRow::for_display)
        .collect();

    match format {
        OutputFormat::Json => {
            let report = TableReport {
                outcome: session.outcome,
                signals: loaded.signals,
                count: rows.len(),
                rows,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            if session.is_empty() {
                println!("No repositories found or there was an error fetching data.");
                return Ok(());
            }
            let heading = if session.outcome.used_fallback() {
                format!("Showing {} repositories from snapshot data", rows.len())
            } else {
                format!("Showing {} repositories", rows.len())
            };
            println!("{}", heading.white().bold());
            println!();
            for row in &rows {
                println!("{}", row.display());
                println!();
            }
        }
    }

    Ok(())
}
