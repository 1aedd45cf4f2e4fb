mod cli;
mod color;
mod commands;
mod config;
mod logging;
mod output;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use output::{output_error, output_list};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    color::init(cli.color);
    logging::init(cli.log_level);

    let format = cli.format;
    if let Err(e) = run(cli) {
        output_error(&e, format);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<()> {
    let now = Utc::now();

    match &cli.command {
        Commands::Completions { shell } => {
            Cli::generate_completions(*shell);
            Ok(())
        }
        Commands::Categories => {
            let config = load_config(&cli)?;
            output_list(&config.categories, cli.format);
            Ok(())
        }
        Commands::Snapshot { output } => {
            let config = load_config(&cli)?;
            commands::snapshot::handle_snapshot(&config, output.clone(), cli.format, now)
        }
        Commands::Table { min_stars, since } => {
            let config = load_config(&cli)?;
            let loaded = commands::load_session(&config, cli.format, now)?;
            commands::table::handle_table(loaded, &config, *min_stars, *since, cli.format)
        }
        Commands::Stats => {
            let config = load_config(&cli)?;
            let loaded = commands::load_session(&config, cli.format, now)?;
            commands::stats::handle_stats(loaded, &config, cli.format)
        }
        Commands::Analyze { categories } => {
            let config = load_config(&cli)?;
            // Validate names before touching the network
            config.select_categories(categories)?;
            let loaded = commands::load_session(&config, cli.format, now)?;
            commands::analyze::handle_analyze(loaded, &config, categories, cli.format)
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.api_url.clone(), cli.token.clone(), cli.snapshot.clone());
    config.validate()?;
    Ok(config)
}
