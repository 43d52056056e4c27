//! Result ordering for presentation.

use std::cmp::Ordering;

use crate::compute::{CompetitorResult, FinalStatus};

/// Order results: finishers by ascending total time, then every
/// disqualified competitor. Ties break by ascending competitor id.
pub fn rank(mut results: Vec<CompetitorResult>) -> Vec<CompetitorResult> {
    results.sort_by(compare_results);
    results
}

/// Total order used by [`rank`].
///
/// Total times compare numerically, which matches comparing their
/// fixed-width `HH:MM:SS.mmm` renderings.
pub fn compare_results(a: &CompetitorResult, b: &CompetitorResult) -> Ordering {
    let by_status = match (&a.status, &b.status) {
        (FinalStatus::Finished(x), FinalStatus::Finished(y)) => x.cmp(y),
        (FinalStatus::Finished(_), FinalStatus::Disqualified(_)) => Ordering::Less,
        (FinalStatus::Disqualified(_), FinalStatus::Finished(_)) => Ordering::Greater,
        (FinalStatus::Disqualified(_), FinalStatus::Disqualified(_)) => Ordering::Equal,
    };
    by_status.then_with(|| a.competitor.cmp(&b.competitor))
}
