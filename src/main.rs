use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;

mod character;
mod cli;
mod commands;
mod config;

use cli::{Cli, Commands, OutputFormat};
use config::{Config, LogLevel};

fn setup_logging(log_level: &LogLevel, verbose: bool) -> Result<()> {
    let log_dir = Config::log_dir();

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("charsheet.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, then --verbose, then config log_level
    let mut builder = env_logger::Builder::new();
    let from_env = std::env::var("RUST_LOG").is_ok();

    if from_env {
        builder.parse_default_env();
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    } else {
        builder.filter_level(log_level.level_filter());
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    info!(
        "Log level: {} (from {})",
        if verbose && !from_env { "debug" } else { log_level.as_filter() },
        if from_env {
            "RUST_LOG env"
        } else if verbose {
            "--verbose"
        } else {
            "config"
        }
    );
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    let default_format = config.output.format;
    let command = cli.command.unwrap_or(Commands::Demo { format: None });

    match command {
        Commands::Demo { format } => commands::demo::run(OutputFormat::resolve(format, default_format)),
        Commands::Build { kind } => commands::build::run(kind, &config),
        Commands::Traits { format } => commands::traits::run(OutputFormat::resolve(format, default_format)),
        Commands::Variants { format } => commands::variants::run(OutputFormat::resolve(format, default_format)),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    setup_logging(&config.log_level, cli.verbose).context("Failed to setup logging")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!("Starting charsheet with config from: {:?}", cli.config);

    run(cli, config).context("Command failed")?;

    Ok(())
}
