//! Race clock values: time of day and elapsed durations.
//!
//! Both are carried with millisecond precision and rendered in the
//! fixed-width `HH:MM:SS.mmm` form used by the event log, the output log and
//! the report. Input also accepts the whole-second `HH:MM:SS` form.

use biathlon_errors::ParseError;
use chrono::{NaiveTime, TimeDelta};

/// Full-precision time format, tried first.
pub const TIME_FORMAT_MILLIS: &str = "%H:%M:%S%.3f";

/// Whole-second fallback format.
pub const TIME_FORMAT_SECONDS: &str = "%H:%M:%S";

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Parse a time of day, trying `HH:MM:SS.mmm` then `HH:MM:SS`.
///
/// # Errors
///
/// Returns [`ParseError::InvalidTime`] if neither format matches.
pub fn parse_time(raw: &str) -> Result<NaiveTime, ParseError> {
    let raw = raw.trim();
    if let Ok(time) = NaiveTime::parse_from_str(raw, TIME_FORMAT_MILLIS) {
        return Ok(time);
    }
    match NaiveTime::parse_from_str(raw, TIME_FORMAT_SECONDS) {
        Ok(time) => Ok(time),
        Err(_) => Err(ParseError::invalid_time(raw)),
    }
}

/// Render a time of day as `HH:MM:SS.mmm`.
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT_MILLIS).to_string()
}

/// Parse a duration written as a clock reading (`H:MM:SS[.mmm]`).
///
/// The hour field is any run of digits, so durations of a day or more parse
/// back from [`format_duration`] output.
///
/// # Errors
///
/// Returns [`ParseError::InvalidTime`] if the hour field is not a number or
/// the rest is not `MM:SS[.mmm]`.
pub fn parse_duration(raw: &str) -> Result<TimeDelta, ParseError> {
    let raw = raw.trim();
    let invalid = || ParseError::invalid_time(raw);
    let (hours, rest) = raw.split_once(':').ok_or_else(invalid)?;
    if hours.is_empty() || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let hours = hours
        .parse()
        .ok()
        .and_then(TimeDelta::try_hours)
        .ok_or_else(invalid)?;
    let Ok(within_hour) = parse_time(&format!("00:{rest}")) else {
        return Err(invalid());
    };
    hours
        .checked_add(&within_hour.signed_duration_since(NaiveTime::MIN))
        .ok_or_else(invalid)
}

/// Render a duration as `HH:MM:SS.mmm`.
///
/// Negative durations render as their absolute value. Hours are zero-padded
/// to two digits and grow wider past 99.
pub fn format_duration(duration: TimeDelta) -> String {
    let total = duration.num_milliseconds().unsigned_abs();
    let hours = total / MILLIS_PER_HOUR;
    let minutes = total % MILLIS_PER_HOUR / MILLIS_PER_MINUTE;
    let seconds = total % MILLIS_PER_MINUTE / MILLIS_PER_SECOND;
    let millis = total % MILLIS_PER_SECOND;
    format!("{hours:02}:{minutes:02}:{seconds:02}.{millis:03}")
}

/// Elapsed time from `from` to `to`; negative when `to` is earlier.
pub fn elapsed(from: NaiveTime, to: NaiveTime) -> TimeDelta {
    to.signed_duration_since(from)
}

/// Distance in metres over a duration, in metres per second.
///
/// `None` when the duration is zero or negative: such a speed is undefined
/// rather than infinite.
pub fn speed_over(distance_m: f64, duration: TimeDelta) -> Option<f64> {
    let millis = duration.num_milliseconds();
    if millis <= 0 {
        return None;
    }
    Some(distance_m * 1_000.0 / millis as f64)
}

/// `serde(with)` adapter for time-of-day fields.
pub mod serde_time {
    use chrono::NaiveTime;
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as `HH:MM:SS.mmm`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time(*time))
    }

    /// Deserialize from `HH:MM:SS.mmm` or `HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Fails when the string matches neither format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_time(&raw).map_err(D::Error::custom)
    }
}

/// `serde(with)` adapter for duration fields.
pub mod serde_duration {
    use chrono::TimeDelta;
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as `HH:MM:SS.mmm`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(duration: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_duration(*duration))
    }

    /// Deserialize from `HH:MM:SS.mmm` or `HH:MM:SS`.
    ///
    /// # Errors
    ///
    /// Fails when the string matches neither format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<TimeDelta, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_duration(&raw).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn parses_millisecond_format() -> TestResult {
        let time = parse_time("12:34:56.789")?;
        assert_eq!(format_time(time), "12:34:56.789");
        Ok(())
    }

    #[test]
    fn falls_back_to_whole_seconds() -> TestResult {
        let time = parse_time("07:08:09")?;
        assert_eq!(format_time(time), "07:08:09.000");
        Ok(())
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse_time("invalid"),
            Err(ParseError::invalid_time("invalid"))
        );
        assert!(parse_time("25:00:00").is_err());
    }

    #[test]
    fn duration_from_clock_reading() -> TestResult {
        let duration = parse_duration("01:02:03.004")?;
        assert_eq!(duration.num_milliseconds(), 3_723_004);
        assert_eq!(parse_duration("00:10:20")?.num_seconds(), 620);
        Ok(())
    }

    #[test]
    fn duration_hours_may_exceed_a_day() -> TestResult {
        assert_eq!(parse_duration("100:00:00.000")?, TimeDelta::hours(100));
        assert_eq!(parse_duration("24:00:01")?.num_seconds(), 86_401);
        assert!(parse_duration("-1:00:00").is_err());
        assert!(parse_duration("10:20").is_err());
        assert!(parse_duration("01:60:00").is_err());
        Ok(())
    }

    #[test]
    fn formats_negative_as_absolute() {
        let duration = TimeDelta::milliseconds(-3_050);
        assert_eq!(format_duration(duration), "00:00:03.050");
    }

    #[test]
    fn formats_long_durations() {
        assert_eq!(
            format_duration(TimeDelta::milliseconds(3_723_004)),
            "01:02:03.004"
        );
        assert_eq!(format_duration(TimeDelta::hours(100)), "100:00:00.000");
    }

    #[test]
    fn speed_is_undefined_for_empty_intervals() {
        assert_eq!(speed_over(100.0, TimeDelta::zero()), None);
        assert_eq!(speed_over(100.0, TimeDelta::seconds(-1)), None);
        let speed = speed_over(100.0, TimeDelta::seconds(300)).unwrap_or(f64::NAN);
        assert!((speed - 100.0 / 300.0).abs() < 1e-12);
    }
}
