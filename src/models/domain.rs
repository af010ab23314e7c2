use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::error::MatchError;
use crate::models::lenient;

/// Legal issue categories a client can file under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Harassment,
    DomesticViolence,
    PropertyIssues,
    WorkplaceDiscrimination,
    Fraud,
    FamilyDisputes,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Harassment,
        Category::DomesticViolence,
        Category::PropertyIssues,
        Category::WorkplaceDiscrimination,
        Category::Fraud,
        Category::FamilyDisputes,
    ];

    /// Display label, as stored in lawyer expertise lists
    pub fn label(self) -> &'static str {
        match self {
            Category::Harassment => "Harassment",
            Category::DomesticViolence => "Domestic Violence",
            Category::PropertyIssues => "Property Issues",
            Category::WorkplaceDiscrimination => "Workplace Discrimination",
            Category::Fraud => "Fraud",
            Category::FamilyDisputes => "Family Disputes",
        }
    }

    /// Whether a free-form expertise label names this category
    #[inline]
    pub fn matches_label(self, label: &str) -> bool {
        label.trim().eq_ignore_ascii_case(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.matches_label(s))
            .ok_or_else(|| MatchError::UnknownCategory(s.trim().to_string()))
    }
}

impl TryFrom<String> for Category {
    type Error = MatchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

/// How quickly the client needs representation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Urgency {
    /// How strongly lawyer workload should count against the match (0-1)
    pub fn load_sensitivity(self) -> f64 {
        match self {
            Urgency::Low => 0.25,
            Urgency::Normal => 0.5,
            Urgency::High => 0.75,
            Urgency::Urgent => 1.0,
        }
    }
}

/// Fee arrangement the client prefers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PricingModel {
    #[default]
    Hourly,
    Fixed,
    Contingency,
}

/// A client's legal issue, validated before it reaches the matcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_budget_range"))]
pub struct Issue {
    pub category: Category,
    #[serde(rename = "budgetMin", alias = "budget_min", default)]
    pub budget_min: f64,
    #[serde(rename = "budgetMax", alias = "budget_max", default = "default_budget_max")]
    pub budget_max: f64,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(rename = "preferredPricing", alias = "preferred_pricing", default)]
    pub preferred_pricing: PricingModel,
}

fn default_budget_max() -> f64 { 10_000.0 }

fn validate_budget_range(issue: &Issue) -> Result<(), ValidationError> {
    if !issue.budget_min.is_finite() || !issue.budget_max.is_finite() {
        return Err(ValidationError::new("budget_not_finite"));
    }
    if issue.budget_min < 0.0 {
        return Err(ValidationError::new("budget_negative"));
    }
    if issue.budget_min > issue.budget_max {
        return Err(ValidationError::new("budget_min_exceeds_max"));
    }
    Ok(())
}

impl Issue {
    /// Build a validated issue
    pub fn new(
        category: Category,
        budget_min: f64,
        budget_max: f64,
        urgency: Urgency,
        preferred_pricing: PricingModel,
    ) -> Result<Self, MatchError> {
        let issue = Self {
            category,
            budget_min,
            budget_max,
            urgency,
            preferred_pricing,
        };
        issue.validate()?;
        Ok(issue)
    }

    /// Budget as an ordered, non-negative range
    ///
    /// Unvalidated input is repaired rather than rejected: non-finite bounds
    /// become zero and inverted bounds are swapped.
    pub fn budget_range(&self) -> (f64, f64) {
        let lo = finite_non_negative(self.budget_min);
        let hi = finite_non_negative(self.budget_max);
        if lo <= hi { (lo, hi) } else { (hi, lo) }
    }
}

/// Lawyer profile as loaded from storage
///
/// Every scoring field is optional on the wire and falls back to
/// zero/false, so older profiles still score (lower) instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LawyerProfile {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(rename = "expertiseCategories", alias = "expertise_categories", default, deserialize_with = "lenient::category_labels")]
    pub expertise_categories: Vec<String>,
    #[serde(rename = "caseSuccessRate", alias = "case_success_rate", default, deserialize_with = "lenient::f64_or_zero")]
    pub case_success_rate: f64,
    #[serde(rename = "isAvailable", alias = "is_available", default, deserialize_with = "lenient::bool_or_false")]
    pub is_available: bool,
    #[serde(rename = "hourlyRate", alias = "hourly_rate", default, deserialize_with = "lenient::f64_or_zero")]
    pub hourly_rate: f64,
    #[serde(rename = "fixedRateMin", alias = "fixed_rate_min", default, deserialize_with = "lenient::f64_or_zero")]
    pub fixed_rate_min: f64,
    #[serde(rename = "fixedRateMax", alias = "fixed_rate_max", default, deserialize_with = "lenient::f64_or_zero")]
    pub fixed_rate_max: f64,
    #[serde(rename = "acceptsContingency", alias = "accepts_contingency", default, deserialize_with = "lenient::bool_or_false")]
    pub accepts_contingency: bool,
    #[serde(rename = "contingencyPercentage", alias = "contingency_percentage", default, deserialize_with = "lenient::f64_or_zero")]
    pub contingency_percentage: f64,
    #[serde(rename = "maxCases", alias = "max_cases", default, deserialize_with = "lenient::u32_or_zero")]
    pub max_cases: u32,
    #[serde(rename = "currentCases", alias = "current_cases", default, deserialize_with = "lenient::u32_or_zero")]
    pub current_cases: u32,
    /// Client rating; shown alongside results, not scored
    #[serde(default, deserialize_with = "lenient::f64_or_zero")]
    pub rating: f64,
}

impl LawyerProfile {
    /// Decode a pool of raw documents, skipping any that cannot be read
    ///
    /// Documents may carry the profile directly or under an object-valued
    /// `data` key. A document that is not an object is logged and dropped;
    /// it never fails the rest of the pool.
    pub fn from_documents(documents: &[serde_json::Value]) -> Vec<LawyerProfile> {
        documents
            .iter()
            .enumerate()
            .filter_map(|(index, doc)| {
                let data = doc.get("data").filter(|d| d.is_object()).unwrap_or(doc);
                match LawyerProfile::deserialize(data) {
                    Ok(profile) => Some(profile),
                    Err(e) => {
                        tracing::warn!("Skipping unreadable lawyer document at {}: {}", index, e);
                        None
                    }
                }
            })
            .collect()
    }

    /// Whether the lawyer can take on another case right now
    #[inline]
    pub fn accepting_new_cases(&self) -> bool {
        self.is_available && self.current_cases < self.max_cases
    }

    /// Whether any expertise label names the given category
    #[inline]
    pub fn handles(&self, category: Category) -> bool {
        self.expertise_categories
            .iter()
            .any(|label| category.matches_label(label))
    }

    /// Number of distinct, non-blank expertise labels
    pub fn expertise_breadth(&self) -> usize {
        let mut seen: Vec<&str> = Vec::with_capacity(self.expertise_categories.len());
        for label in &self.expertise_categories {
            let label = label.trim();
            if !label.is_empty() && !seen.iter().any(|s| s.eq_ignore_ascii_case(label)) {
                seen.push(label);
            }
        }
        seen.len()
    }

    /// Success rate clamped to 0-1
    #[inline]
    pub fn success_rate(&self) -> f64 {
        if self.case_success_rate.is_finite() {
            self.case_success_rate.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Share of capacity in use (0-1); a lawyer with no capacity counts as full
    pub fn load(&self) -> f64 {
        if self.max_cases == 0 {
            return 1.0;
        }
        (self.current_cases as f64 / self.max_cases as f64).min(1.0)
    }

    /// Fixed-fee range, if the lawyer offers one
    pub fn fixed_rate_range(&self) -> Option<(f64, f64)> {
        let lo = finite_non_negative(self.fixed_rate_min);
        let hi = finite_non_negative(self.fixed_rate_max);
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        (hi > 0.0).then_some((lo, hi))
    }
}

#[inline]
fn finite_non_negative(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Criteria a lawyer is scored on, in aggregation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    CaseType,
    Specialization,
    SuccessRate,
    Availability,
    Pricing,
    ClientProfile,
}

impl Criterion {
    pub const ALL: [Criterion; 6] = [
        Criterion::CaseType,
        Criterion::Specialization,
        Criterion::SuccessRate,
        Criterion::Availability,
        Criterion::Pricing,
        Criterion::ClientProfile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Criterion::CaseType => "case_type",
            Criterion::Specialization => "specialization",
            Criterion::SuccessRate => "success_rate",
            Criterion::Availability => "availability",
            Criterion::Pricing => "pricing",
            Criterion::ClientProfile => "client_profile",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scoring weights, one per criterion, summing to 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub case_type: f64,
    pub specialization: f64,
    pub success_rate: f64,
    pub availability: f64,
    pub pricing: f64,
    pub client_profile: f64,
}

impl ScoringWeights {
    const SUM_TOLERANCE: f64 = 1e-6;

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::CaseType => self.case_type,
            Criterion::Specialization => self.specialization,
            Criterion::SuccessRate => self.success_rate,
            Criterion::Availability => self.availability,
            Criterion::Pricing => self.pricing,
            Criterion::ClientProfile => self.client_profile,
        }
    }

    pub fn sum(&self) -> f64 {
        Criterion::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Check every weight is finite and non-negative and the total is 1
    pub fn validate(&self) -> Result<(), MatchError> {
        for criterion in Criterion::ALL {
            let weight = self.get(criterion);
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::InvalidWeights(format!(
                    "{} weight must be a non-negative number, got {}",
                    criterion, weight
                )));
            }
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > Self::SUM_TOLERANCE {
            return Err(MatchError::InvalidWeights(format!(
                "weights must sum to 1, got {}",
                sum
            )));
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            case_type: 0.25,
            specialization: 0.15,
            success_rate: 0.15,
            availability: 0.25,
            pricing: 0.10,
            client_profile: 0.10,
        }
    }
}

/// Shape constants for the pricing curves
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringCurves {
    /// Highest hourly rate that still scores fully, as a share of budget_max
    pub hourly_budget_ratio: f64,
    /// Contingency percentage at or below which the fee scores fully
    pub contingency_reasonable_pct: f64,
}

impl Default for ScoringCurves {
    fn default() -> Self {
        Self {
            hourly_budget_ratio: 0.1,
            contingency_reasonable_pct: 25.0,
        }
    }
}
