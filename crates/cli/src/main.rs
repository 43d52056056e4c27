//! biathlon-report - biathlon race results from an event log
//!
//! Reads a JSON race configuration and a raw event log, then writes the
//! time-sorted output log to `output/output.log` and the ranked results to
//! `output/report` under the working directory.

#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]

mod error;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Result;
use biathlon_core::process;
use biathlon_errors::ResultExt;
use biathlon_io::{load_config, read_event_log, write_outcome};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Output directory, relative to the working directory.
const OUTPUT_DIR: &str = "output";

const DEFAULT_LOG_FILTER: &str = "biathlon_report=warn,biathlon_core=warn,biathlon_io=warn";

#[derive(Parser)]
#[command(name = "biathlon-report")]
#[command(about = "Compute biathlon race results from an event log")]
#[command(version)]
#[command(long_about = "
biathlon-report replays a race event log against the race configuration,
infers how each competitor's race ended, and writes the sorted event log
and the ranked results to the output/ directory.

Log verbosity is controlled by the RUST_LOG environment variable.
")]
struct Cli {
    /// Race configuration (JSON)
    #[arg(long, value_name = "PATH")]
    config: PathBuf,

    /// Raw event log
    #[arg(long, value_name = "PATH")]
    input: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(&cli, Path::new(OUTPUT_DIR)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::print_error_human(&e);
            ExitCode::from(error::exit_code(&e))
        }
    }
}

fn run(cli: &Cli, output_dir: &Path) -> Result<()> {
    let config = load_config(&cli.config)?;
    let log = read_event_log(&cli.input)?;
    if !log.skipped.is_empty() {
        warn!(
            skipped = log.skipped.len(),
            "ignored malformed event lines; set RUST_LOG=biathlon_io=debug for details"
        );
    }

    let outcome = process(log.events, &config).with_context("process race")?;
    let (log_path, report_path) = write_outcome(output_dir, &outcome)?;
    output::print_summary(&outcome, log.skipped.len(), &log_path, &report_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn both_paths_are_required() {
        assert!(Cli::try_parse_from(["biathlon-report", "--config", "c.json"]).is_err());
        assert!(Cli::try_parse_from(["biathlon-report", "--input", "events"]).is_err());
    }

    #[test]
    fn parses_paths() -> TestResult {
        let cli = Cli::try_parse_from([
            "biathlon-report",
            "--config",
            "sunny_5_skiers/config.json",
            "--input",
            "sunny_5_skiers/events",
        ])?;
        assert_eq!(cli.config, PathBuf::from("sunny_5_skiers/config.json"));
        assert_eq!(cli.input, PathBuf::from("sunny_5_skiers/events"));
        Ok(())
    }

    #[test]
    fn rejects_unknown_flags() {
        let parsed = Cli::try_parse_from([
            "biathlon-report",
            "--config",
            "c.json",
            "--input",
            "events",
            "--json",
        ]);
        assert!(parsed.is_err());
    }
}
