//! Output files.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use biathlon_core::{CompetitorResult, Event, RaceOutcome};
use biathlon_errors::{BiathlonError, ErrorContext, ResultExt};
use tracing::{debug, info};

use crate::report::render_report_line;

/// Output log file name inside the output directory.
pub const LOG_FILE: &str = "output.log";

/// Report file name inside the output directory.
pub const REPORT_FILE: &str = "report";

/// Write one `[HH:MM:SS.mmm] sentence` line per event to `writer`.
///
/// # Errors
///
/// Returns [`BiathlonError::Io`] if a write fails.
pub fn write_event_log<W: Write>(writer: W, events: &[Event]) -> Result<(), BiathlonError> {
    let mut writer = BufWriter::new(writer);
    for event in events {
        writeln!(writer, "{}", event.log_line())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one report line per result to `writer`.
///
/// # Errors
///
/// Returns [`BiathlonError::Io`] if a write fails.
pub fn write_report<W: Write>(writer: W, results: &[CompetitorResult]) -> Result<(), BiathlonError> {
    let mut writer = BufWriter::new(writer);
    for result in results {
        writeln!(writer, "{}", render_report_line(result))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write [`LOG_FILE`] and [`REPORT_FILE`] under `dir`, creating it if
/// needed. Returns the two paths written.
///
/// # Errors
///
/// Returns an I/O error, wrapped with the offending path, if the directory
/// or either file cannot be written.
pub fn write_outcome(dir: &Path, outcome: &RaceOutcome) -> Result<(PathBuf, PathBuf), BiathlonError> {
    fs::create_dir_all(dir).context(path_context("create output directory", dir))?;

    let log_path = dir.join(LOG_FILE);
    debug!(path = ?log_path, lines = outcome.log.len(), "writing output log");
    let file = File::create(&log_path).context(path_context("create output log", &log_path))?;
    write_event_log(file, &outcome.log).context(path_context("write output log", &log_path))?;

    let report_path = dir.join(REPORT_FILE);
    debug!(path = ?report_path, lines = outcome.results.len(), "writing report");
    let file = File::create(&report_path).context(path_context("create report", &report_path))?;
    write_report(file, &outcome.results).context(path_context("write report", &report_path))?;

    info!(dir = ?dir, "wrote output log and report");
    Ok((log_path, report_path))
}

fn path_context(operation: &str, path: &Path) -> ErrorContext {
    ErrorContext::new(operation).with("path", path.display().to_string())
}
