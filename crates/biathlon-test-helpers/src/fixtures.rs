//! Race fixtures.
//!
//! [`RaceConfigFixture`] builds configurations; [`CompetitorScript`] writes
//! one competitor's events in race order with chainable steps.

use biathlon_core::clock::parse_time;
use biathlon_core::{Event, EventKind, FiringDuration, PenaltyCounting, RaceConfig, ScoringPolicy};
use chrono::{NaiveTime, TimeDelta};

/// Parse `HH:MM:SS[.mmm]`, panicking on malformed fixture input.
///
/// # Panics
///
/// Panics if `raw` is not a valid time of day.
#[track_caller]
pub fn at(raw: &str) -> NaiveTime {
    match parse_time(raw) {
        Ok(time) => time,
        Err(e) => panic!("fixture time {raw:?}: {e}"),
    }
}

#[derive(Debug, Clone)]
pub struct RaceConfigFixture {
    pub laps: u32,
    pub lap_length: u32,
    pub penalty_length: u32,
    pub firing_lines: u32,
    pub start: NaiveTime,
    pub start_delta: TimeDelta,
    pub policy: ScoringPolicy,
}

impl RaceConfigFixture {
    /// Two laps of 3651 m, 50 m penalty loop, 09:30 start with 30 s window.
    pub fn sprint() -> Self {
        Self {
            laps: 2,
            lap_length: 3651,
            penalty_length: 50,
            firing_lines: 1,
            start: at("09:30:00"),
            start_delta: TimeDelta::seconds(30),
            policy: ScoringPolicy::default(),
        }
    }

    /// One 100 m lap, 50 m penalty loop, 09:00 start with 5 s window.
    pub fn short() -> Self {
        Self {
            laps: 1,
            lap_length: 100,
            penalty_length: 50,
            firing_lines: 1,
            start: at("09:00:00"),
            start_delta: TimeDelta::seconds(5),
            policy: ScoringPolicy::default(),
        }
    }

    pub fn with_laps(mut self, laps: u32) -> Self {
        self.laps = laps;
        self
    }

    pub fn with_start_delta(mut self, delta: TimeDelta) -> Self {
        self.start_delta = delta;
        self
    }

    pub fn with_penalty_counting(mut self, counting: PenaltyCounting) -> Self {
        self.policy.penalty_counting = counting;
        self
    }

    pub fn with_firing_duration(mut self, firing: FiringDuration) -> Self {
        self.policy.firing_duration = firing;
        self
    }

    pub fn build(&self) -> RaceConfig {
        RaceConfig::new(
            self.laps,
            self.lap_length,
            self.penalty_length,
            self.start,
            self.start_delta,
        )
        .with_firing_lines(self.firing_lines)
        .with_policy(self.policy)
    }
}

/// Chainable event builder for a single competitor.
///
/// ```rust
/// use biathlon_test_helpers::fixtures::CompetitorScript;
///
/// let events = CompetitorScript::new(1)
///     .registered("09:05:59")
///     .drawn("09:15:00", "09:30:00")
///     .started("09:30:01")
///     .lap("09:49:31")
///     .into_events();
/// assert_eq!(events.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct CompetitorScript {
    competitor: u32,
    events: Vec<Event>,
}

impl CompetitorScript {
    pub fn new(competitor: u32) -> Self {
        Self {
            competitor,
            events: Vec::new(),
        }
    }

    #[track_caller]
    pub fn push(mut self, time: &str, kind: EventKind) -> Self {
        self.events.push(Event::new(at(time), self.competitor, kind));
        self
    }

    #[track_caller]
    pub fn registered(self, time: &str) -> Self {
        self.push(time, EventKind::Registered)
    }

    #[track_caller]
    pub fn drawn(self, time: &str, start: &str) -> Self {
        let start = at(start);
        self.push(time, EventKind::StartTimeDrawn(start))
    }

    #[track_caller]
    pub fn on_start_line(self, time: &str) -> Self {
        self.push(time, EventKind::OnStartLine)
    }

    #[track_caller]
    pub fn started(self, time: &str) -> Self {
        self.push(time, EventKind::Started)
    }

    /// Arrive at `range`, hit each of `targets`, and leave.
    #[track_caller]
    pub fn shoot(mut self, arrive: &str, range: u32, targets: &[u32], leave: &str) -> Self {
        self = self.push(arrive, EventKind::OnFiringRange(range));
        for &target in targets {
            self = self.push(arrive, EventKind::TargetHit(target));
        }
        self.push(leave, EventKind::LeftFiringRange)
    }

    #[track_caller]
    pub fn penalty(self, enter: &str, leave: &str) -> Self {
        self.push(enter, EventKind::EnteredPenaltyLoop)
            .push(leave, EventKind::LeftPenaltyLoop)
    }

    #[track_caller]
    pub fn lap(self, time: &str) -> Self {
        self.push(time, EventKind::LapCompleted)
    }

    #[track_caller]
    pub fn cannot_continue(self, time: &str, reason: &str) -> Self {
        self.push(time, EventKind::CannotContinue(reason.to_string()))
    }

    #[track_caller]
    pub fn finished(self, time: &str) -> Self {
        self.push(time, EventKind::Finished)
    }

    #[track_caller]
    pub fn disqualified(self, time: &str, reason: &str) -> Self {
        self.push(time, EventKind::disqualified(reason))
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// Merge several scripts into one event list in script order.
pub fn merge<I>(scripts: I) -> Vec<Event>
where
    I: IntoIterator<Item = CompetitorScript>,
{
    scripts
        .into_iter()
        .flat_map(CompetitorScript::into_events)
        .collect()
}
