//! File formats for biathlon results.
//!
//! - [`event_log`] - Parse the raw `[time] kind competitor [args]` event log
//! - [`config`] - Load and validate the JSON race configuration
//! - [`report`] - Render result lines
//! - [`output`] - Write the output log and the report

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod event_log;
pub mod output;
pub mod report;

pub use config::{load_config, parse_config};
pub use event_log::{EventLog, SkippedLine, parse_event_line, parse_event_log, read_event_log};
pub use output::{LOG_FILE, REPORT_FILE, write_event_log, write_outcome, write_report};
pub use report::{render_report_line, render_split};
