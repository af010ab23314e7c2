use crate::models::MatchResult;

/// Whether a scored lawyer may appear in the results, and why not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    /// Does not practice in the issue's category
    CategoryMismatch,
    /// Overall score is zero
    NoScore,
    /// Overall score is positive but under the configured floor
    BelowMinimum,
}

impl Eligibility {
    #[inline]
    pub fn is_eligible(self) -> bool {
        self == Eligibility::Eligible
    }
}

/// Hard filter applied after scoring
///
/// A category mismatch disqualifies regardless of the other criteria, and so
/// does a non-positive overall score. `min_score` raises the floor further;
/// at 0 only strictly positive scores pass.
#[inline]
pub fn check_eligibility(result: &MatchResult<'_>, min_score: f64) -> Eligibility {
    if result.breakdown.case_type <= 0.0 {
        return Eligibility::CategoryMismatch;
    }
    if result.overall_score <= 0.0 {
        return Eligibility::NoScore;
    }
    if result.overall_score < min_score {
        return Eligibility::BelowMinimum;
    }
    Eligibility::Eligible
}
