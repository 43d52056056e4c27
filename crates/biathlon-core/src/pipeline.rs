//! End-to-end race processing.
//!
//! The passes run strictly one after another: finalize every competitor,
//! sort the augmented log by time, fold each competitor, then rank.

use biathlon_errors::ContractError;
use tracing::info;

use crate::compute::{CompetitorResult, compute};
use crate::config::RaceConfig;
use crate::event::{Event, group_by_competitor};
use crate::finalize::finalize;
use crate::rank::rank;

/// Everything a run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceOutcome {
    /// Input events plus synthetic terminal markers, sorted by time.
    pub log: Vec<Event>,
    /// One result per competitor, ranked.
    pub results: Vec<CompetitorResult>,
}

/// Turn the raw event log into the sorted output log and ranked results.
///
/// # Errors
///
/// Returns a [`ContractError`] if a competitor's finalized sequence is
/// ill-formed, which would indicate a terminal marker in the input followed
/// by further events for the same competitor.
pub fn process(events: Vec<Event>, config: &RaceConfig) -> Result<RaceOutcome, ContractError> {
    let received = events.len();
    let mut log = finalize(events, config);
    // Stable: a synthetic marker sharing a timestamp stays after the event it follows.
    log.sort_by_key(|event| event.time);

    let results = group_by_competitor(&log)
        .into_iter()
        .map(|(competitor, own)| compute(competitor, own.iter().copied(), config))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        received,
        logged = log.len(),
        competitors = results.len(),
        "processed race log"
    );

    Ok(RaceOutcome {
        log,
        results: rank(results),
    })
}
