use chrono::NaiveDate;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "survey",
    version,
    about = "Survey open-source modeling tools hosted on GitHub"
)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "SURVEY_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Search API base URL (overrides config file)
    #[arg(long, env = "SURVEY_API_URL", global = true)]
    pub api_url: Option<String>,

    /// API token (overrides config file)
    #[arg(long, env = "SURVEY_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Snapshot file used when the API is unavailable (overrides config file)
    #[arg(long, env = "SURVEY_SNAPSHOT", global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List repositories that pass the star and activity filters
    #[command(visible_alias = "t")]
    Table {
        /// Minimum stars (default: config min_stars)
        #[arg(long)]
        min_stars: Option<u64>,

        /// Earliest last-push date, YYYY-MM-DD (default: today minus config active_days)
        #[arg(long, value_name = "DATE")]
        since: Option<NaiveDate>,
    },
    /// Global statistics: first commit years, languages, star distribution
    Stats,
    /// Show which repositories mention each keyword category
    #[command(visible_alias = "a")]
    Analyze {
        /// Categories to analyze (default: all configured categories)
        categories: Vec<String>,
    },
    /// Fetch from the API and write the fallback snapshot file
    Snapshot {
        /// Where to write the snapshot (default: config snapshot path)
        #[arg(long, short = 'O', value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// List configured keyword categories
    Categories,
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Generate shell completions and write to stdout
    pub fn generate_completions(shell: Shell) {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "survey", &mut std::io::stdout());
    }
}
