//! Per-criterion scorers.
//!
//! Each scorer is a pure function of (issue, lawyer) returning 0-100.
//! Results pass through [`clamp_score`] so no criterion can leave that range.

use crate::models::{Issue, LawyerProfile, PricingModel, ScoringCurves};

/// Clamp a raw score into 0-100; non-finite values score zero
#[inline]
pub fn clamp_score(raw: f64) -> f64 {
    if raw.is_finite() { raw.clamp(0.0, 100.0) } else { 0.0 }
}

/// 100 when the lawyer practices in the issue's category, else 0
#[inline]
pub fn case_type_score(issue: &Issue, lawyer: &LawyerProfile) -> f64 {
    if lawyer.handles(issue.category) { 100.0 } else { 0.0 }
}

/// Focus on the issue's category: `100 / n` for `n` distinct expertise labels
///
/// A single-category specialist scores 100, a lawyer listing four areas 25.
/// Zero when the category is not among them.
#[inline]
pub fn specialization_score(issue: &Issue, lawyer: &LawyerProfile) -> f64 {
    if !lawyer.handles(issue.category) {
        return 0.0;
    }
    let breadth = lawyer.expertise_breadth().max(1);
    clamp_score(100.0 / breadth as f64)
}

/// Historical success rate as a percentage
#[inline]
pub fn success_rate_score(lawyer: &LawyerProfile) -> f64 {
    clamp_score(lawyer.success_rate() * 100.0)
}

/// 100 when the lawyer is accepting new cases, else 0
#[inline]
pub fn availability_score(lawyer: &LawyerProfile) -> f64 {
    if lawyer.accepting_new_cases() { 100.0 } else { 0.0 }
}

/// Fit between the lawyer's fees and the client's pricing preference and budget
pub fn pricing_score(issue: &Issue, lawyer: &LawyerProfile, curves: &ScoringCurves) -> f64 {
    let raw = match issue.preferred_pricing {
        PricingModel::Hourly => hourly_fit(issue, lawyer, curves),
        PricingModel::Fixed => fixed_fit(issue, lawyer),
        PricingModel::Contingency => contingency_fit(lawyer, curves),
    };
    clamp_score(raw)
}

/// Workload fit: busy lawyers lose more ground the more urgent the issue
///
/// score = 100 * (1 - sensitivity(urgency) * load)
#[inline]
pub fn client_profile_score(issue: &Issue, lawyer: &LawyerProfile) -> f64 {
    let sensitivity = issue.urgency.load_sensitivity();
    clamp_score(100.0 * (1.0 - sensitivity * lawyer.load()))
}

/// Hourly rate against a ceiling of `budget_max * hourly_budget_ratio`
///
/// At or under the ceiling scores 100, above it decays as ceiling / rate.
fn hourly_fit(issue: &Issue, lawyer: &LawyerProfile, curves: &ScoringCurves) -> f64 {
    let rate = lawyer.hourly_rate;
    if !rate.is_finite() || rate <= 0.0 {
        return 0.0;
    }

    let (_, budget_max) = issue.budget_range();
    // No stated budget
    if budget_max <= 0.0 {
        return 100.0;
    }

    let ceiling = budget_max * curves.hourly_budget_ratio.max(0.0);
    if rate <= ceiling {
        100.0
    } else {
        100.0 * ceiling / rate
    }
}

/// Overlap of the lawyer's fixed-fee range and the client's budget
///
/// Measured against the narrower of the two ranges, so a quote inside the
/// budget and a quote wrapping the whole budget both score 100.
fn fixed_fit(issue: &Issue, lawyer: &LawyerProfile) -> f64 {
    let Some((fee_lo, fee_hi)) = lawyer.fixed_rate_range() else {
        return 0.0;
    };
    let (budget_lo, budget_hi) = issue.budget_range();

    // Zero-width ranges: full credit when contained in the other range
    if fee_hi - fee_lo <= 0.0 {
        return if fee_lo >= budget_lo && fee_lo <= budget_hi { 100.0 } else { 0.0 };
    }
    if budget_hi - budget_lo <= 0.0 {
        return if budget_lo >= fee_lo && budget_lo <= fee_hi { 100.0 } else { 0.0 };
    }

    let overlap = (fee_hi.min(budget_hi) - fee_lo.max(budget_lo)).max(0.0);
    let narrower = (fee_hi - fee_lo).min(budget_hi - budget_lo);
    100.0 * overlap / narrower
}

/// Contingency fee: full marks up to the reasonable percentage, linear to 0 at 100%
fn contingency_fit(lawyer: &LawyerProfile, curves: &ScoringCurves) -> f64 {
    if !lawyer.accepts_contingency {
        return 0.0;
    }

    let pct = if lawyer.contingency_percentage.is_finite() {
        lawyer.contingency_percentage.clamp(0.0, 100.0)
    } else {
        100.0
    };
    let reasonable = curves.contingency_reasonable_pct.clamp(0.0, 100.0);

    if pct <= reasonable {
        100.0
    } else {
        100.0 * (100.0 - pct) / (100.0 - reasonable)
    }
}
