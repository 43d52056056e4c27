//! Raw event log parsing.
//!
//! One event per line: `[HH:MM:SS.mmm] <kind-id> <competitor-id> [args...]`.
//! Malformed lines are skipped and kept aside with their error; blank lines
//! are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use biathlon_core::clock::parse_time;
use biathlon_core::{CompetitorId, Event, EventKind};
use biathlon_errors::{BiathlonError, ErrorContext, ParseError, ResultExt};
use tracing::{debug, info};

/// Mandatory fields: time, kind id, competitor id.
const MANDATORY_FIELDS: usize = 3;

/// A line that could not be turned into an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_number: usize,
    pub line: String,
    pub error: ParseError,
}

/// Parsed events in input order plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a single event line.
///
/// # Errors
///
/// Returns a [`ParseError`] for too few fields, a bad timestamp, a
/// non-numeric id, an unknown kind, or a missing or malformed payload.
pub fn parse_event_line(line: &str) -> Result<Event, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [time, kind, competitor, args @ ..] = fields.as_slice() else {
        return Err(ParseError::TooFewFields {
            expected: MANDATORY_FIELDS,
            found: fields.len(),
        });
    };

    let time = parse_time(time.trim_matches(['[', ']']))?;
    let kind_id = parse_number("event kind", kind)?;
    let competitor = CompetitorId(parse_number("competitor id", competitor)?);
    let kind = parse_kind(kind_id, args)?;
    Ok(Event::new(time, competitor, kind))
}

fn parse_kind(id: u32, args: &[&str]) -> Result<EventKind, ParseError> {
    let first = |payload: &'static str| {
        args.first()
            .copied()
            .ok_or(ParseError::MissingPayload { kind: id, payload })
    };
    let reason = |payload: &'static str| {
        if args.is_empty() {
            Err(ParseError::MissingPayload { kind: id, payload })
        } else {
            Ok(args.join(" "))
        }
    };

    let kind = match id {
        1 => EventKind::Registered,
        2 => EventKind::StartTimeDrawn(parse_time(first("start time")?)?),
        3 => EventKind::OnStartLine,
        4 => EventKind::Started,
        5 => EventKind::OnFiringRange(parse_number("firing range", first("firing range")?)?),
        6 => EventKind::TargetHit(parse_number("target", first("target")?)?),
        7 => EventKind::LeftFiringRange,
        8 => EventKind::EnteredPenaltyLoop,
        9 => EventKind::LeftPenaltyLoop,
        10 => EventKind::LapCompleted,
        11 => EventKind::CannotContinue(reason("reason")?),
        32 => EventKind::Disqualified(reason("reason")?),
        33 => EventKind::Finished,
        other => return Err(ParseError::UnknownEventKind(other)),
    };
    Ok(kind)
}

fn parse_number(field: &'static str, raw: &str) -> Result<u32, ParseError> {
    match raw.parse() {
        Ok(value) => Ok(value),
        Err(_) => Err(ParseError::invalid_number(field, raw)),
    }
}

/// Parse every line of `reader`, skipping malformed ones.
///
/// Lines may end in `\n` or `\r\n`. A UTF-8 byte order mark at the start
/// of the first line is dropped. A line that is not valid UTF-8 is skipped
/// like any other malformed line.
///
/// # Errors
///
/// Returns [`BiathlonError::Io`] if reading fails. Malformed lines are not
/// errors; they are collected in [`EventLog::skipped`].
pub fn parse_event_log<R: Read>(reader: R) -> Result<EventLog, BiathlonError> {
    let mut log = EventLog::default();
    for (index, bytes) in BufReader::new(reader).split(b'\n').enumerate() {
        let line_number = index.saturating_add(1);
        let line = match decode_line(bytes?, index == 0) {
            Ok(line) => line,
            Err(line) => {
                log.skip(line_number, line, ParseError::InvalidUtf8);
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match parse_event_line(&line) {
            Ok(event) => log.events.push(event),
            Err(error) => log.skip(line_number, line, error),
        }
    }
    info!(
        events = log.events.len(),
        skipped = log.skipped.len(),
        "parsed event log"
    );
    Ok(log)
}

/// Decode one raw line, or hand back a lossy copy if it is not UTF-8.
fn decode_line(mut bytes: Vec<u8>, first: bool) -> Result<String, String> {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    let line = String::from_utf8(bytes)
        .map_err(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())?;
    match line.strip_prefix('\u{feff}') {
        Some(rest) if first => Ok(rest.to_owned()),
        _ => Ok(line),
    }
}

impl EventLog {
    fn skip(&mut self, line_number: usize, line: String, error: ParseError) {
        debug!(line_number, %error, "skipping malformed event line");
        self.skipped.push(SkippedLine {
            line_number,
            line,
            error,
        });
    }
}

/// Open and parse the event log at `path`.
///
/// # Errors
///
/// Returns an I/O error, wrapped with the path, if the file cannot be read.
pub fn read_event_log(path: &Path) -> Result<EventLog, BiathlonError> {
    debug!(path = ?path, "reading event log");
    let context = || ErrorContext::new("read event log").with("path", path.display().to_string());
    let file = File::open(path).context(context())?;
    parse_event_log(file).context(context())
}
