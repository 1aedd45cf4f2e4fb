use anyhow::Result;
use survey_core::stats::{first_commit_years, language_counts, star_summary};

use crate::cli::OutputFormat;
use crate::commands::Loaded;
use crate::config::Config;
use crate::output::{output_result, StatsReport};

pub fn handle_stats(loaded: Loaded, config: &Config, format: OutputFormat) -> Result<()> {
    let session = &loaded.session;
    let filter = config.filter(session.today, None, None);
    let records = session.filtered(&filter);

    let report = StatsReport {
        outcome: session.outcome,
        signals: loaded.signals,
        repositories: records.len(),
        first_commit_years: first_commit_years(records.iter().copied()),
        languages: language_counts(records.iter().copied()),
        stars: star_summary(records.iter().copied()),
    };

    output_result(&report, format);
    Ok(())
}
