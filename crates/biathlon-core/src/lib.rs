//! Event-driven result computation for biathlon races.
//!
//! Raw race events go in; a time-sorted event log and ranked per-competitor
//! results come out.
//!
//! ## Modules
//! - `clock` - Time-of-day and duration parsing/formatting (`HH:MM:SS.mmm`)
//! - `event` - The event model and its log rendering
//! - `config` - Race configuration and scoring policy
//! - `finalize` - Inference of missing finished / disqualified markers
//! - `compute` - Per-competitor fold into lap splits, penalties and status
//! - `rank` - Presentation order
//! - `pipeline` - The passes above, run in order
//!
//! ```
//! use biathlon_core::{Event, EventKind, RaceConfig, clock, process};
//! use chrono::TimeDelta;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = RaceConfig::new(1, 100, 50, clock::parse_time("09:00:00")?, TimeDelta::seconds(5));
//! let events = vec![
//!     Event::new(clock::parse_time("08:59:00")?, 1, EventKind::StartTimeDrawn(clock::parse_time("09:00:00")?)),
//!     Event::new(clock::parse_time("09:00:02")?, 1, EventKind::Started),
//!     Event::new(clock::parse_time("09:05:00")?, 1, EventKind::LapCompleted),
//! ];
//! let outcome = process(events, &config)?;
//! let total = outcome.results.first().map(|r| r.total_time_or_status());
//! assert_eq!(total.as_deref(), Some("00:05:00.000"));
//! # Ok(())
//! # }
//! ```

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod clock;
pub mod compute;
pub mod config;
pub mod event;
pub mod finalize;
pub mod pipeline;
pub mod rank;

pub use compute::{CompetitorResult, FinalStatus, LapSplit, SHOTS_PER_VISIT, compute};
pub use config::{FiringDuration, PenaltyCounting, RaceConfig, ScoringPolicy};
pub use event::{CompetitorId, Event, EventKind, NOT_FINISHED, NOT_STARTED, group_by_competitor};
pub use finalize::{finalize, infer_terminal};
pub use pipeline::{RaceOutcome, process};
pub use rank::{compare_results, rank};
