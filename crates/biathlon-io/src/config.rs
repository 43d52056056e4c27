//! Race configuration loading.

use std::fs;
use std::path::Path;

use biathlon_core::RaceConfig;
use biathlon_errors::{BiathlonError, ConfigError, ErrorContext, ResultExt};
use tracing::debug;

/// Decode and validate a JSON race configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Malformed`] if the document does not decode, or
/// the validation error for an out-of-range field.
pub fn parse_config(json: &str) -> Result<RaceConfig, ConfigError> {
    let config: RaceConfig =
        serde_json::from_str(json).map_err(|e| ConfigError::malformed(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

/// Read, decode and validate the configuration file at `path`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise any error
/// from [`parse_config`], wrapped with the path.
pub fn load_config(path: &Path) -> Result<RaceConfig, BiathlonError> {
    debug!(path = ?path, "loading race configuration");
    let context = || ErrorContext::new("load config").with("path", path.display().to_string());
    let json = fs::read_to_string(path).context(context())?;
    let config = parse_config(&json).context(context())?;
    debug!(
        laps = config.laps,
        lap_length = config.lap_length,
        penalty_length = config.penalty_length,
        "loaded race configuration"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use biathlon_core::{FiringDuration, PenaltyCounting};
    use biathlon_errors::ErrorCategory;
    use chrono::TimeDelta;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const SPRINT: &str = r#"{
        "laps": 2,
        "lapLen": 3651,
        "penaltyLen": 50,
        "firingLines": 1,
        "start": "09:30:00",
        "startDelta": "00:00:30"
    }"#;

    #[test]
    fn decodes_wire_names_and_clock_fields() -> TestResult {
        let config = parse_config(SPRINT)?;
        assert_eq!(config.laps, 2);
        assert_eq!(config.lap_length, 3651);
        assert_eq!(config.penalty_length, 50);
        assert_eq!(config.start_delta, TimeDelta::seconds(30));
        assert_eq!(config.policy.penalty_counting, PenaltyCounting::Cumulative);
        assert_eq!(config.policy.firing_duration, FiringDuration::Carry);
        Ok(())
    }

    #[test]
    fn decodes_policy_fields() -> TestResult {
        let json = r#"{
            "laps": 1, "lapLen": 100, "penaltyLen": 50,
            "start": "09:00:00.000", "startDelta": "00:00:05.000",
            "penaltyCounting": "sinceLastVisit", "firingDuration": "resetEachLap"
        }"#;
        let config = parse_config(json)?;
        assert_eq!(config.firing_lines, 1);
        assert_eq!(config.policy.penalty_counting, PenaltyCounting::SinceLastVisit);
        assert_eq!(config.policy.firing_duration, FiringDuration::ResetEachLap);
        Ok(())
    }

    #[test]
    fn rejects_bad_documents() {
        assert!(matches!(
            parse_config("{\"laps\": 2"),
            Err(ConfigError::Malformed(_))
        ));
        let bad_time = SPRINT.replace("09:30:00", "half past nine");
        assert!(matches!(
            parse_config(&bad_time),
            Err(ConfigError::Malformed(_))
        ));
        let zero_laps = SPRINT.replace("\"laps\": 2", "\"laps\": 0");
        assert_eq!(
            parse_config(&zero_laps),
            Err(ConfigError::not_positive("laps", 0))
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_config(Path::new("/nonexistent/biathlon/config.json"));
        let category = result.err().map(|e| e.category());
        assert_eq!(category, Some(ErrorCategory::IO));
    }
}
