use clap::Parser;
use std::{io, path::PathBuf};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordsort_cli::input::{self, InputError};
use wordsort_core::{Report, config::Config, sorter::SortOrder};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read the line from a file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sort order, overriding the config file (ascending, descending)
    #[arg(short, long)]
    order: Option<SortOrder>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Core(#[from] wordsort_core::Error),
}

fn load_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(order) = cli.order {
        config.order = order;
    }
    debug!("config: {:?}", config);
    Ok(config)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = load_config(cli)?;

    let line = match &cli.input {
        Some(path) => {
            debug!("Reading line from {:?}", path);
            input::read_line_from_file(path)?
        }
        None => input::read_line(io::stdin().lock())?,
    };

    let report = Report::build(&line, &config);
    info!("Sorted {} words", report.words.len());

    report
        .write_to(io::stdout().lock())
        .map_err(wordsort_core::Error::from)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the report.
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
