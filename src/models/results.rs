use serde::Serialize;

use crate::models::domain::{Criterion, LawyerProfile};

/// Per-criterion scores (0-100) kept alongside the overall score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub case_type: f64,
    pub specialization: f64,
    pub success_rate: f64,
    pub availability: f64,
    pub pricing: f64,
    pub client_profile: f64,
}

impl ScoreBreakdown {
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

    /// Criterion scores in aggregation order
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// A scored lawyer, borrowed from the candidate pool for one matching call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    pub lawyer: &'a LawyerProfile,
    #[serde(rename = "overallScore")]
    pub overall_score: f64,
    pub breakdown: ScoreBreakdown,
    /// Position in the caller's candidate list, the last-resort tie-break
    #[serde(skip)]
    pub(crate) position: usize,
}

impl<'a> MatchResult<'a> {
    pub fn new(lawyer: &'a LawyerProfile, overall_score: f64, breakdown: ScoreBreakdown) -> Self {
        Self {
            lawyer,
            overall_score,
            breakdown,
            position: 0,
        }
    }

    pub(crate) fn at_position(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}
