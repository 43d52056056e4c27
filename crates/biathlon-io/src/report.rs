//! Report line rendering.
//!
//! ```text
//! [00:29:03.872] 1 [{00:29:03.872, 2.093}, {}] {00:01:44.296, 0.481} 4/5
//! ```

use biathlon_core::{CompetitorResult, LapSplit};
use biathlon_core::clock::format_duration;

/// Placeholder for a speed that is undefined.
const UNDEFINED_SPEED: &str = "-";

/// Render one split as `{HH:MM:SS.mmm, speed}`.
///
/// The speed carries three decimals, or `-` when undefined.
pub fn render_split(split: &LapSplit) -> String {
    let elapsed = format_duration(split.elapsed);
    match split.speed {
        Some(speed) => format!("{{{elapsed}, {speed:.3}}}"),
        None => format!("{{{elapsed}, {UNDEFINED_SPEED}}}"),
    }
}

fn render_lap(split: &LapSplit) -> String {
    if split.is_unset() {
        "{}".to_string()
    } else {
        render_split(split)
    }
}

/// Render one report line, without the trailing newline.
pub fn render_report_line(result: &CompetitorResult) -> String {
    let laps = result
        .laps
        .iter()
        .map(render_lap)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "[{}] {} [{laps}] {} {}/{}",
        result.total_time_or_status(),
        result.competitor,
        render_split(&result.penalty),
        result.hits,
        result.shots
    )
}
