//! Race events.
//!
//! An [`Event`] is one timestamped occurrence for one competitor. The kind
//! and its payload are a single [`EventKind`] enum, so every kind carries
//! exactly the data it needs and nothing else.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::clock::format_time;

/// Disqualification reason for a competitor who never validly started.
pub const NOT_STARTED: &str = "Not started";

/// Disqualification reason for a competitor who started but did not
/// complete every lap.
pub const NOT_FINISHED: &str = "Not finished";

/// Competitor identifier as assigned at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompetitorId(pub u32);

impl fmt::Display for CompetitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for CompetitorId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// What happened, with the kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// 1: registered for the race
    Registered,
    /// 2: start time set by the draw
    StartTimeDrawn(NaiveTime),
    /// 3: on the start line
    OnStartLine,
    /// 4: crossed the start
    Started,
    /// 5: arrived at the given firing range
    OnFiringRange(u32),
    /// 6: hit the given target
    TargetHit(u32),
    /// 7: left the firing range
    LeftFiringRange,
    /// 8: entered the penalty loop
    EnteredPenaltyLoop,
    /// 9: left the penalty loop
    LeftPenaltyLoop,
    /// 10: completed a main lap
    LapCompleted,
    /// 11: stopped racing, with the stated reason
    CannotContinue(String),
    /// 32: disqualified, with the reason
    Disqualified(String),
    /// 33: finished the race
    Finished,
}

impl EventKind {
    /// Stable numeric id used by the log format.
    pub const fn id(&self) -> u32 {
        match self {
            EventKind::Registered => 1,
            EventKind::StartTimeDrawn(_) => 2,
            EventKind::OnStartLine => 3,
            EventKind::Started => 4,
            EventKind::OnFiringRange(_) => 5,
            EventKind::TargetHit(_) => 6,
            EventKind::LeftFiringRange => 7,
            EventKind::EnteredPenaltyLoop => 8,
            EventKind::LeftPenaltyLoop => 9,
            EventKind::LapCompleted => 10,
            EventKind::CannotContinue(_) => 11,
            EventKind::Disqualified(_) => 32,
            EventKind::Finished => 33,
        }
    }

    /// Finished or disqualified: the marker that closes a competitor's record.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, EventKind::Disqualified(_) | EventKind::Finished)
    }

    /// Disqualification with the given reason.
    pub fn disqualified(reason: impl Into<String>) -> Self {
        EventKind::Disqualified(reason.into())
    }
}

/// A single timestamped occurrence for one competitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub time: NaiveTime,
    pub competitor: CompetitorId,
    pub kind: EventKind,
}

impl Event {
    pub fn new(time: NaiveTime, competitor: impl Into<CompetitorId>, kind: EventKind) -> Self {
        Self {
            time,
            competitor: competitor.into(),
            kind,
        }
    }

    /// Output log line: `[HH:MM:SS.mmm] <sentence>`.
    pub fn log_line(&self) -> String {
        format!("[{}] {self}", format_time(self.time))
    }
}

/// Renders the English sentence for the event, without the timestamp.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.competitor;
        match &self.kind {
            EventKind::Registered => write!(f, "The competitor({id}) registered"),
            EventKind::StartTimeDrawn(start) => write!(
                f,
                "The start time for the competitor({id}) was set by a draw to {}",
                format_time(*start)
            ),
            EventKind::OnStartLine => write!(f, "The competitor({id}) is on the start line"),
            EventKind::Started => write!(f, "The competitor({id}) has started"),
            EventKind::OnFiringRange(range) => {
                write!(f, "The competitor({id}) is on the firing range({range})")
            }
            EventKind::TargetHit(target) => {
                write!(f, "The target({target}) has been hit by competitor({id})")
            }
            EventKind::LeftFiringRange => write!(f, "The competitor({id}) left the firing range"),
            EventKind::EnteredPenaltyLoop => {
                write!(f, "The competitor({id}) entered the penalty laps")
            }
            EventKind::LeftPenaltyLoop => write!(f, "The competitor({id}) left the penalty laps"),
            EventKind::LapCompleted => write!(f, "The competitor({id}) ended the main lap"),
            EventKind::CannotContinue(reason) => {
                write!(f, "The competitor({id}) can`t continue: {reason}")
            }
            EventKind::Disqualified(reason) => {
                write!(f, "The competitor({id}) is disqualified: {reason}")
            }
            EventKind::Finished => write!(f, "The competitor({id}) finished"),
        }
    }
}

/// Bucket events by competitor, keeping arrival order inside each bucket.
///
/// Buckets iterate in ascending competitor id.
pub fn group_by_competitor<'a, I>(events: I) -> BTreeMap<CompetitorId, Vec<&'a Event>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut groups: BTreeMap<CompetitorId, Vec<&'a Event>> = BTreeMap::new();
    for event in events {
        groups.entry(event.competitor).or_default().push(event);
    }
    groups
}
