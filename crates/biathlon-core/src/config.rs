//! Race configuration.

use biathlon_errors::ConfigError;
use chrono::{NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::clock::{self, format_duration};

/// How penalty laps are counted at each penalty-loop entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PenaltyCounting {
    /// Add every miss so far (`shots - hits`) on each entry. A competitor
    /// visiting the loop twice has the first shortfall counted twice.
    #[default]
    Cumulative,
    /// Add only the misses accrued since the previous entry.
    SinceLastVisit,
}

/// What happens to the last firing-range duration when a lap closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FiringDuration {
    /// Keep it: a lap without a range visit still subtracts the previous
    /// lap's shooting time.
    #[default]
    Carry,
    /// Clear it once it has been subtracted from a lap.
    ResetEachLap,
}

/// Scoring policy knobs. Defaults reproduce the historical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringPolicy {
    #[serde(default)]
    pub penalty_counting: PenaltyCounting,
    #[serde(default)]
    pub firing_duration: FiringDuration,
}

/// Immutable race parameters, loaded once per run.
///
/// Field names on the wire follow the configuration file:
///
/// ```json
/// {
///   "laps": 2,
///   "lapLen": 3651,
///   "penaltyLen": 50,
///   "firingLines": 1,
///   "start": "09:30:00",
///   "startDelta": "00:00:30"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Laps required to finish
    pub laps: u32,
    /// Main lap length in metres
    #[serde(rename = "lapLen")]
    pub lap_length: u32,
    /// Penalty loop length in metres
    #[serde(rename = "penaltyLen")]
    pub penalty_length: u32,
    /// Number of firing lines per lap; informational, defaults to 1
    #[serde(rename = "firingLines", default = "default_firing_lines")]
    pub firing_lines: u32,
    /// Scheduled start, used when a competitor has no drawn start time
    #[serde(with = "clock::serde_time")]
    pub start: NaiveTime,
    /// Inclusive tolerance after the scheduled start for a valid start
    #[serde(rename = "startDelta", with = "clock::serde_duration")]
    pub start_delta: TimeDelta,
    #[serde(flatten)]
    pub policy: ScoringPolicy,
}

fn default_firing_lines() -> u32 {
    1
}

impl RaceConfig {
    /// Config with one firing line and the default scoring policy.
    pub fn new(
        laps: u32,
        lap_length: u32,
        penalty_length: u32,
        start: NaiveTime,
        start_delta: TimeDelta,
    ) -> Self {
        Self {
            laps,
            lap_length,
            penalty_length,
            firing_lines: default_firing_lines(),
            start,
            start_delta,
            policy: ScoringPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScoringPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_firing_lines(mut self, firing_lines: u32) -> Self {
        self.firing_lines = firing_lines;
        self
    }

    /// Reject configurations that would corrupt every computed result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotPositive`] for a zero count or length and
    /// [`ConfigError::Negative`] for a negative start delta.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let counts = [
            ("laps", self.laps),
            ("lapLen", self.lap_length),
            ("penaltyLen", self.penalty_length),
            ("firingLines", self.firing_lines),
        ];
        if let Some((field, value)) = counts.into_iter().find(|(_, value)| *value == 0) {
            return Err(ConfigError::not_positive(field, value));
        }
        if self.start_delta < TimeDelta::zero() {
            return Err(ConfigError::negative(
                "startDelta",
                format!("-{}", format_duration(self.start_delta)),
            ));
        }
        Ok(())
    }

    /// Whether `started` falls within `[scheduled, scheduled + start_delta]`.
    pub fn is_valid_start(&self, scheduled: NaiveTime, started: NaiveTime) -> bool {
        let offset = clock::elapsed(scheduled, started);
        offset >= TimeDelta::zero() && offset <= self.start_delta
    }
}
