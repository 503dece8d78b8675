mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use placestew_core::{AppConfig, ConfigError};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Parser)]
#[command(name = "placestew")]
#[command(version, disable_version_flag = true)]
#[command(about = "Extract structured place data from saved map pages")]
struct Cli {
    /// Saved HTML page to parse
    file: PathBuf,

    /// Write JSON here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Emit JSON (the default and only format)
    #[arg(short, long)]
    json: bool,

    /// Indent the JSON across multiple lines
    #[arg(short, long)]
    pretty: bool,

    /// Treat FILE as a search results listing and emit an array of records
    #[arg(short, long)]
    listing: bool,

    /// Print version
    #[allow(dead_code)]
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: Option<bool>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = placestew_core::load_app_config_from_env();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level(&config)))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    if let Err(e) = &config {
        tracing::warn!(
            error = %e,
            level = DEFAULT_LOG_LEVEL,
            "ignoring invalid configuration, using default log level"
        );
    }

    let rendered = render_file(cli)?;
    output::emit(&rendered, cli.output.as_deref())
}

/// Log level from the loaded configuration.
///
/// Invalid configuration falls back to [`DEFAULT_LOG_LEVEL`]; only the input
/// file decides the exit code.
fn log_level(config: &Result<AppConfig, ConfigError>) -> &str {
    config
        .as_ref()
        .map_or(DEFAULT_LOG_LEVEL, |config| config.log_level.as_str())
}

/// Parse `cli.file` and render the result as JSON.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable.
fn render_file(cli: &Cli) -> anyhow::Result<String> {
    tracing::debug!(
        file = %cli.file.display(),
        json = cli.json,
        pretty = cli.pretty,
        listing = cli.listing,
        "parsing input"
    );

    if cli.listing {
        let html = placestew_scraper::read_html(&cli.file)?;
        let records = placestew_scraper::parse_listing(&html);
        tracing::info!(records = records.len(), "parsed results listing");
        output::render(&records, cli.pretty)
    } else {
        let record = placestew_scraper::parse_file(&cli.file)?;
        tracing::info!(fields_found = record.field_count(), "parsed place page");
        output::render(&record, cli.pretty)
    }
}

#[cfg(test)]
mod tests;
