//! Console output for biathlon-report

use std::path::Path;

use anyhow::Error;
use biathlon_core::RaceOutcome;
use colored::*;

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// One-line summary of what was written.
pub fn print_summary(outcome: &RaceOutcome, skipped: usize, log_path: &Path, report_path: &Path) {
    let finished = outcome
        .results
        .iter()
        .filter(|r| r.status.is_finished())
        .count();
    println!(
        "{} {} competitors ({} finished), {} events -> {}, {}",
        "Done:".green().bold(),
        outcome.results.len(),
        finished,
        outcome.log.len(),
        log_path.display(),
        report_path.display()
    );
    if skipped > 0 {
        println!("  {} {} malformed lines skipped", "Note:".yellow(), skipped);
    }
}
