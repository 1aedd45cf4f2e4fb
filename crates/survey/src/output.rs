use crate::cli::OutputFormat;
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use survey_core::classify::CategoryReport;
use survey_core::normalize::TableRow;
use survey_core::stats::{LanguageCount, StarSummary};
use survey_core::{Category, FetchOutcome, RecordingSink, Severity, StatusMessage, StatusSink};

pub fn output_result<T: Serialize + Displayable>(result: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(result) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            println!("{}", result.display());
        }
    }
}

pub fn output_list<T: Serialize + Displayable>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string_pretty(&items) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            for item in items {
                println!("{}", item.display());
                println!();
            }
        }
    }
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let json_err = JsonError {
                error: true,
                code: "error".to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err).unwrap_or_else(|_| {
                format!(r#"{{"error": true, "message": "{}"}}"#, err)
            })
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

/// Records status messages; text mode also prints them to stderr as they arrive.
/// JSON output embeds the recorded messages in its report instead.
pub struct ConsoleSink {
    format: OutputFormat,
    recorded: RecordingSink,
}

impl ConsoleSink {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            recorded: RecordingSink::new(),
        }
    }

    fn emit(&mut self, severity: Severity, message: &str) {
        if self.format == OutputFormat::Text {
            let label = match severity {
                Severity::Error => "Error".red().bold(),
                Severity::Warning => "Warning".yellow().bold(),
                Severity::Info => "Info".cyan().bold(),
            };
            eprintln!("{}: {}", label, message);
        }
        match severity {
            Severity::Error => self.recorded.error(message),
            Severity::Warning => self.recorded.warning(message),
            Severity::Info => self.recorded.info(message),
        }
    }

    /// Write messages not yet shown to stderr, for runs that end without a report
    pub fn flush_unreported(&self) {
        if self.format != OutputFormat::Json {
            return;
        }
        for message in &self.recorded.messages {
            if let Ok(line) = serde_json::to_string(message) {
                eprintln!("{}", line);
            }
        }
    }

    pub fn into_messages(self) -> Vec<StatusMessage> {
        self.recorded.messages
    }
}

impl StatusSink for ConsoleSink {
    fn error(&mut self, message: &str) {
        self.emit(Severity::Error, message);
    }

    fn warning(&mut self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    fn info(&mut self, message: &str) {
        self.emit(Severity::Info, message);
    }
}

pub trait Displayable {
    fn display(&self) -> String;
}

impl Displayable for TableRow {
    fn display(&self) -> String {
        let mut output = format!(
            "{} {} {}\n  {}: {}\n  {}: {}  {}: {}\n  {}: {}  {}: {}",
            self.name.cyan().bold(),
            "★".yellow(),
            self.stars.yellow(),
            "URL".dimmed(),
            self.url,
            "Last Updated".dimmed(),
            self.last_updated,
            "First Commit".dimmed(),
            self.first_commit,
            "Forks".dimmed(),
            self.forks,
            "Issues".dimmed(),
            self.issues,
        );
        output.push_str(&format!(
            "\n  {}: {}  {}: {}",
            "Language".dimmed(),
            self.language,
            "License".dimmed(),
            self.license
        ));
        output.push_str(&format!("\n  {}: {}", "Description".dimmed(), self.description));
        if !self.topics.is_empty() {
            let topics: Vec<String> = self
                .topics
                .split(',')
                .map(|t| t.magenta().to_string())
                .collect();
            output.push_str(&format!("\n  {}: {}", "Topics".dimmed(), topics.join(", ")));
        }
        output
    }
}

impl Displayable for Category {
    fn display(&self) -> String {
        format!("{}: {}", self.name.cyan().bold(), self.synonyms.join(", "))
    }
}

impl Displayable for CategoryReport {
    fn display(&self) -> String {
        let mut output = format!(
            "{} {}\n  {}: {}  {}: {}  {}: {}",
            "Analysis for".white().bold(),
            format!("'{}'", self.category).cyan().bold(),
            "Total".dimmed(),
            self.total,
            format!("Mentions {}", self.category).dimmed(),
            self.matching_count.to_string().green(),
            format!("No {} mention", self.category).dimmed(),
            self.non_matching_count.to_string().red(),
        );

        if self.matches.is_empty() {
            output.push_str(&format!(
                "\n  No repositories found mentioning '{}'",
                self.category
            ));
        }
        for m in &self.matches {
            output.push_str(&format!(
                "\n  {} ({} {})",
                m.name.cyan(),
                "★".yellow(),
                m.stars
            ));
            if let Some(desc) = &m.description {
                output.push_str(&format!(" - {}", desc));
            }
        }
        output
    }
}

/// Global statistics over the filtered repositories
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub outcome: FetchOutcome,
    pub signals: Vec<StatusMessage>,
    pub repositories: usize,
    pub first_commit_years: BTreeMap<i32, usize>,
    pub languages: Vec<LanguageCount>,
    pub stars: Option<StarSummary>,
}

impl Displayable for StatsReport {
    fn display(&self) -> String {
        let mut output = format!(
            "{} ({} repositories)",
            "Global statistics".white().bold(),
            self.repositories
        );

        output.push_str(&format!("\n\n{}", "First commit by year".cyan().bold()));
        for (year, count) in &self.first_commit_years {
            output.push_str(&format!("\n  {}  {:>4}  {}", year, count, bar(*count)));
        }

        output.push_str(&format!("\n\n{}", "Repositories by language".cyan().bold()));
        for lang in &self.languages {
            output.push_str(&format!(
                "\n  {:<16} {:>4}  {}",
                lang.language,
                lang.count,
                bar(lang.count)
            ));
        }

        output.push_str(&format!("\n\n{}", "Star distribution".cyan().bold()));
        match &self.stars {
            Some(s) => output.push_str(&format!(
                "\n  {}: {}  {}: {:.1}  {}: {:.1}  {}: {:.1}  {}: {}",
                "min".dimmed(),
                s.min,
                "q1".dimmed(),
                s.lower_quartile,
                "median".dimmed(),
                s.median,
                "q3".dimmed(),
                s.upper_quartile,
                "max".dimmed(),
                s.max
            )),
            None => output.push_str(&format!("\n  {}", "No repositories".dimmed())),
        }

        output
    }
}

fn bar(count: usize) -> String {
    "█".repeat(count.min(60)).green().to_string()
}
