//! Per-competitor result computation.
//!
//! [`compute`] folds one competitor's time-ordered events into a
//! [`CompetitorResult`]: lap splits, the penalty-loop aggregate, shooting
//! tally and the final status. The fold is pure and owns all of its state, so
//! competitors can be computed independently of each other.

use biathlon_errors::ContractError;
use chrono::{NaiveTime, TimeDelta};
use tracing::warn;

use crate::clock::{elapsed, format_duration, speed_over};
use crate::config::{FiringDuration, PenaltyCounting, RaceConfig};
use crate::event::{CompetitorId, Event, EventKind};

/// Shots fired per firing-range visit.
pub const SHOTS_PER_VISIT: u32 = 5;

/// Elapsed time and average speed over one lap or the penalty loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LapSplit {
    pub elapsed: TimeDelta,
    /// Metres per second; `None` when the moving time is not positive.
    pub speed: Option<f64>,
}

impl LapSplit {
    /// Placeholder for a lap the competitor never reached.
    pub fn unset() -> Self {
        Self {
            elapsed: TimeDelta::zero(),
            speed: None,
        }
    }

    pub fn is_unset(&self) -> bool {
        self.elapsed.is_zero() && self.speed.is_none()
    }
}

impl Default for LapSplit {
    fn default() -> Self {
        Self::unset()
    }
}

/// How a competitor's race ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinalStatus {
    /// Elapsed from the scheduled start to the finish marker.
    Finished(TimeDelta),
    /// Disqualification reason, carried verbatim.
    Disqualified(String),
}

impl FinalStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, FinalStatus::Finished(_))
    }

    /// Formatted total time, or the disqualification reason.
    pub fn label(&self) -> String {
        match self {
            FinalStatus::Finished(total) => format_duration(*total),
            FinalStatus::Disqualified(reason) => reason.clone(),
        }
    }
}

/// Computed result for one competitor.
#[derive(Debug, Clone, PartialEq)]
pub struct CompetitorResult {
    pub competitor: CompetitorId,
    pub status: FinalStatus,
    /// Exactly `config.laps` entries; unreached laps are [`LapSplit::unset`].
    pub laps: Vec<LapSplit>,
    /// Aggregate over every penalty-loop visit.
    pub penalty: LapSplit,
    pub hits: u32,
    pub shots: u32,
}

impl CompetitorResult {
    pub fn total_time_or_status(&self) -> String {
        self.status.label()
    }
}

/// Fold one competitor's events into their result.
///
/// `events` must be sorted by time, belong to `competitor`, and end with the
/// competitor's single terminal marker (see [`crate::finalize`]).
///
/// # Errors
///
/// Returns a [`ContractError`] when the sequence is empty, contains an event
/// of another competitor, or does not end with a terminal marker.
pub fn compute<'a, I>(
    competitor: CompetitorId,
    events: I,
    config: &RaceConfig,
) -> Result<CompetitorResult, ContractError>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut fold = LapFold::new(config);
    let mut last: Option<&Event> = None;

    for event in events {
        if event.competitor != competitor {
            return Err(ContractError::ForeignEvent {
                expected: competitor.0,
                found: event.competitor.0,
            });
        }
        fold.apply(event);
        last = Some(event);
    }

    let marker = last.ok_or(ContractError::EmptyEventSequence {
        competitor: competitor.0,
    })?;
    let status = match &marker.kind {
        EventKind::Finished => FinalStatus::Finished(elapsed(fold.scheduled_start, marker.time)),
        EventKind::Disqualified(reason) => FinalStatus::Disqualified(reason.clone()),
        _ => {
            return Err(ContractError::MissingTerminalMarker {
                competitor: competitor.0,
            });
        }
    };

    Ok(fold.into_result(competitor, status))
}

/// State threaded through one competitor's events.
struct LapFold<'c> {
    config: &'c RaceConfig,
    scheduled_start: NaiveTime,
    firing_start: NaiveTime,
    last_firing: TimeDelta,
    lap_start: NaiveTime,
    penalty_start: NaiveTime,
    penalty_total: TimeDelta,
    penalty_laps: u32,
    /// Shortfall already turned into penalty laps, for `SinceLastVisit`.
    counted_shortfall: u32,
    hits: u32,
    shots: u32,
    laps: Vec<LapSplit>,
}

impl<'c> LapFold<'c> {
    fn new(config: &'c RaceConfig) -> Self {
        Self {
            config,
            scheduled_start: config.start,
            firing_start: NaiveTime::MIN,
            last_firing: TimeDelta::zero(),
            lap_start: NaiveTime::MIN,
            penalty_start: NaiveTime::MIN,
            penalty_total: TimeDelta::zero(),
            penalty_laps: 0,
            counted_shortfall: 0,
            hits: 0,
            shots: 0,
            laps: Vec::with_capacity(config.laps as usize),
        }
    }

    fn apply(&mut self, event: &Event) {
        let now = event.time;
        match &event.kind {
            EventKind::StartTimeDrawn(start) => self.scheduled_start = *start,
            EventKind::Started => self.lap_start = now,
            EventKind::OnFiringRange(_) => {
                self.firing_start = now;
                self.shots = self.shots.saturating_add(SHOTS_PER_VISIT);
            }
            EventKind::TargetHit(_) => self.hits = self.hits.saturating_add(1),
            EventKind::LeftFiringRange => self.last_firing = elapsed(self.firing_start, now),
            EventKind::EnteredPenaltyLoop => {
                self.penalty_start = now;
                self.count_penalty_laps();
            }
            EventKind::LeftPenaltyLoop => {
                self.penalty_total = self.penalty_total + elapsed(self.penalty_start, now);
            }
            EventKind::LapCompleted => self.close_lap(now),
            EventKind::CannotContinue(_) => self.pad_laps(),
            EventKind::Registered
            | EventKind::OnStartLine
            | EventKind::Disqualified(_)
            | EventKind::Finished => {}
        }
    }

    fn count_penalty_laps(&mut self) {
        let shortfall = self.shots.saturating_sub(self.hits);
        let added = match self.config.policy.penalty_counting {
            PenaltyCounting::Cumulative => shortfall,
            PenaltyCounting::SinceLastVisit => shortfall.saturating_sub(self.counted_shortfall),
        };
        self.counted_shortfall = shortfall;
        self.penalty_laps = self.penalty_laps.saturating_add(added);
    }

    fn close_lap(&mut self, now: NaiveTime) {
        let lap_time = elapsed(self.lap_start, now);
        let moving = lap_time - self.last_firing;
        self.laps.push(LapSplit {
            elapsed: lap_time,
            speed: speed_over(f64::from(self.config.lap_length), moving),
        });
        self.lap_start = now;
        if self.config.policy.firing_duration == FiringDuration::ResetEachLap {
            self.last_firing = TimeDelta::zero();
        }
    }

    fn pad_laps(&mut self) {
        let required = self.config.laps as usize;
        if self.laps.len() < required {
            self.laps.resize(required, LapSplit::unset());
        }
    }

    fn into_result(mut self, competitor: CompetitorId, status: FinalStatus) -> CompetitorResult {
        let required = self.config.laps as usize;
        if self.laps.len() > required {
            warn!(
                %competitor,
                completed = self.laps.len(),
                required,
                "dropping lap splits beyond the configured lap count"
            );
            self.laps.truncate(required);
        }
        self.pad_laps();

        let penalty_distance =
            f64::from(self.config.penalty_length) * f64::from(self.penalty_laps);
        CompetitorResult {
            competitor,
            status,
            laps: self.laps,
            penalty: LapSplit {
                elapsed: self.penalty_total,
                speed: speed_over(penalty_distance, self.penalty_total),
            },
            hits: self.hits,
            shots: self.shots,
        }
    }
}
