//! Terminal status inference.
//!
//! The log rarely says how a competitor's race ended. [`finalize`] reads each
//! competitor's events and appends the missing finished / disqualified
//! marker.

use tracing::{debug, info};

use crate::config::RaceConfig;
use crate::event::{CompetitorId, Event, EventKind, NOT_FINISHED, NOT_STARTED, group_by_competitor};

/// Return `events` plus one synthetic terminal event for every competitor
/// whose events carry none.
///
/// The synthetic event is stamped with the competitor's latest timestamp so
/// that, after a stable time sort, it closes their record.
pub fn finalize(mut events: Vec<Event>, config: &RaceConfig) -> Vec<Event> {
    let synthetic: Vec<Event> = group_by_competitor(&events)
        .into_iter()
        .filter_map(|(competitor, own)| infer_terminal(competitor, &own, config))
        .collect();

    info!(synthesized = synthetic.len(), "finalized competitor records");
    events.extend(synthetic);
    events
}

/// Decide the terminal event for one competitor, or `None` if their events
/// already contain one.
///
/// `events` are in arrival order and all belong to `competitor`.
pub fn infer_terminal(
    competitor: CompetitorId,
    events: &[&Event],
    config: &RaceConfig,
) -> Option<Event> {
    if events.iter().any(|event| event.kind.is_terminal()) {
        return None;
    }
    let last_seen = events.iter().map(|event| event.time).max()?;

    let mut scheduled = config.start;
    let mut started = false;
    let mut laps: u32 = 0;
    for event in events {
        match &event.kind {
            EventKind::StartTimeDrawn(start) => scheduled = *start,
            EventKind::Started => started |= config.is_valid_start(scheduled, event.time),
            EventKind::LapCompleted => laps = laps.saturating_add(1),
            _ => {}
        }
    }

    let kind = if !started {
        EventKind::disqualified(NOT_STARTED)
    } else if laps == config.laps {
        EventKind::Finished
    } else {
        EventKind::disqualified(NOT_FINISHED)
    };
    debug!(%competitor, laps, started, kind = kind.id(), "synthesized terminal event");

    Some(Event::new(last_seen, competitor, kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::parse_time;
    use chrono::TimeDelta;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn config(laps: u32) -> Result<RaceConfig, Box<dyn std::error::Error>> {
        Ok(RaceConfig::new(
            laps,
            100,
            50,
            parse_time("09:00:00")?,
            TimeDelta::seconds(5),
        ))
    }

    fn event(time: &str, id: u32, kind: EventKind) -> Result<Event, Box<dyn std::error::Error>> {
        Ok(Event::new(parse_time(time)?, id, kind))
    }

    #[test]
    fn existing_terminal_is_kept() -> TestResult {
        let events = vec![
            event("09:00:00", 1, EventKind::Started)?,
            event("09:10:00", 1, EventKind::disqualified("Fell"))?,
        ];
        let finalized = finalize(events.clone(), &config(1)?);
        assert_eq!(finalized, events);
        Ok(())
    }

    #[test]
    fn draw_without_start_is_not_started() -> TestResult {
        let draw = parse_time("09:00:00.000")?;
        let events = vec![event("09:00:00.000", 1, EventKind::StartTimeDrawn(draw))?];
        let finalized = finalize(events, &config(1)?);
        let last = finalized.last().map(|e| e.kind.clone());
        assert_eq!(last, Some(EventKind::disqualified(NOT_STARTED)));
        Ok(())
    }

    #[test]
    fn synthetic_marker_uses_latest_timestamp() -> TestResult {
        let events = vec![
            event("09:00:02", 7, EventKind::Started)?,
            event("09:20:00", 7, EventKind::LapCompleted)?,
            event("09:10:00", 7, EventKind::TargetHit(1))?,
        ];
        let finalized = finalize(events, &config(1)?);
        let marker = finalized.last().map(|e| (e.time, e.kind.clone()));
        assert_eq!(
            marker,
            Some((parse_time("09:20:00")?, EventKind::Finished))
        );
        Ok(())
    }

    #[test]
    fn missing_draw_falls_back_to_config_start() -> TestResult {
        let events = vec![
            event("09:00:03", 2, EventKind::Started)?,
            event("09:30:00", 2, EventKind::LapCompleted)?,
        ];
        let finalized = finalize(events, &config(2)?);
        let last = finalized.last().map(|e| e.kind.clone());
        assert_eq!(last, Some(EventKind::disqualified(NOT_FINISHED)));
        Ok(())
    }
}
