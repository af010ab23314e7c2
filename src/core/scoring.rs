use crate::core::criteria::{
    availability_score, case_type_score, clamp_score, client_profile_score, pricing_score,
    specialization_score, success_rate_score,
};
use crate::models::{Issue, LawyerProfile, ScoreBreakdown, ScoringCurves, ScoringWeights};

/// Score every criterion for one lawyer
pub fn score_breakdown(
    issue: &Issue,
    lawyer: &LawyerProfile,
    curves: &ScoringCurves,
) -> ScoreBreakdown {
    ScoreBreakdown {
        case_type: case_type_score(issue, lawyer),
        specialization: specialization_score(issue, lawyer),
        success_rate: success_rate_score(lawyer),
        availability: availability_score(lawyer),
        pricing: pricing_score(issue, lawyer, curves),
        client_profile: client_profile_score(issue, lawyer),
    }
}

/// Combine criterion scores into an overall 0-100 score
///
/// Scoring formula:
/// score = (
///     case_type * 0.25 +         # Practices in the issue's category
///     specialization * 0.15 +    # Fewer areas of practice = more focused
///     success_rate * 0.15 +      # Track record
///     availability * 0.25 +      # Accepting new cases
///     pricing * 0.10 +           # Fees fit preference and budget
///     client_profile * 0.10      # Workload vs urgency
/// )
///
/// Terms are summed in criterion order so the result is reproducible.
pub fn aggregate(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> f64 {
    let total: f64 = breakdown
        .iter()
        .map(|(criterion, score)| score * weights.get(criterion))
        .sum();
    clamp_score(total)
}

/// Calculate the overall match score (0-100) and its breakdown
pub fn calculate_match_score(
    issue: &Issue,
    lawyer: &LawyerProfile,
    weights: &ScoringWeights,
    curves: &ScoringCurves,
) -> (f64, ScoreBreakdown) {
    let breakdown = score_breakdown(issue, lawyer, curves);
    (aggregate(&breakdown, weights), breakdown)
}
