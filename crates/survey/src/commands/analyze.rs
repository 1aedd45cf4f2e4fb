use anyhow::Result;
use serde::Serialize;
use survey_core::{analyze, CategoryReport, FetchOutcome, StatusMessage};

use crate::cli::OutputFormat;
use crate::commands::Loaded;
use crate::config::Config;
use crate::output::output_list;

#[derive(Serialize)]
struct AnalysisReport {
    outcome: FetchOutcome,
    signals: Vec<StatusMessage>,
    reports: Vec<CategoryReport>,
}

/// Run the keyword analysis over every session record (filters do not apply)
pub fn handle_analyze(
    loaded: Loaded,
    config: &Config,
    names: &[String],
    format: OutputFormat,
) -> Result<()> {
    let categories = config.select_categories(names)?;
    let session = &loaded.session;

    if session.is_empty() && format == OutputFormat::Text {
        println!("No repositories to analyze.");
        return Ok(());
    }

    let reports: Vec<CategoryReport> = categories
        .iter()
        .map(|category| analyze(session.records(), category))
        .collect();

    match format {
        OutputFormat::Json => {
            let report = AnalysisReport {
                outcome: session.outcome,
                signals: loaded.signals,
                reports,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => output_list(&reports, format),
    }
    Ok(())
}
