use std::cmp::Ordering;

use crate::models::MatchResult;

/// Ranking order for two results
///
/// Higher overall score first, then higher success rate, then fewer current
/// cases, then earlier position in the caller's candidate list.
pub fn compare_results(a: &MatchResult<'_>, b: &MatchResult<'_>) -> Ordering {
    b.overall_score
        .total_cmp(&a.overall_score)
        .then_with(|| b.lawyer.success_rate().total_cmp(&a.lawyer.success_rate()))
        .then_with(|| a.lawyer.current_cases.cmp(&b.lawyer.current_cases))
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort results into ranking order
pub fn rank(results: &mut [MatchResult<'_>]) {
    results.sort_by(compare_results);
}
