use rayon::prelude::*;

use crate::core::{
    filters::{check_eligibility, Eligibility},
    ranking::rank,
    scoring::calculate_match_score,
};
use crate::error::MatchError;
use crate::models::{Issue, LawyerProfile, MatchResult, ScoringCurves, ScoringWeights};

/// Tuning for a matching call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    /// Overall score a candidate must reach; 0 keeps every positive score
    pub min_score: f64,
    /// Maximum number of ranked results to return
    pub limit: Option<usize>,
    /// Pool size from which candidates are scored on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_score: 0.0,
            limit: None,
            parallel_threshold: 256,
        }
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every candidate on all six criteria
/// 2. Aggregate into an overall score
/// 3. Drop category mismatches and non-positive scores
/// 4. Rank with deterministic tie-breaks and apply the limit
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    curves: ScoringCurves,
    options: MatchOptions,
}

impl Matcher {
    /// Create a matcher, rejecting weights that are negative or do not sum to 1
    pub fn new(weights: ScoringWeights) -> Result<Self, MatchError> {
        weights.validate()?;
        Ok(Self {
            weights,
            curves: ScoringCurves::default(),
            options: MatchOptions::default(),
        })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
            curves: ScoringCurves::default(),
            options: MatchOptions::default(),
        }
    }

    pub fn with_curves(mut self, curves: ScoringCurves) -> Self {
        self.curves = curves;
        self
    }

    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Score a single lawyer without filtering
    ///
    /// Ineligible lawyers still get a full breakdown, which is what callers
    /// show when explaining why someone was left out.
    pub fn score_candidate<'a>(&self, issue: &Issue, lawyer: &'a LawyerProfile) -> MatchResult<'a> {
        let (score, breakdown) = calculate_match_score(issue, lawyer, &self.weights, &self.curves);
        MatchResult::new(lawyer, score, breakdown)
    }

    /// Find and rank the lawyers suited to an issue
    ///
    /// # Arguments
    /// * `issue` - The client's validated issue
    /// * `candidates` - The lawyer pool; never modified
    ///
    /// # Returns
    /// Eligible lawyers in ranking order. An empty pool yields an empty list.
    pub fn match_lawyers<'a>(
        &self,
        issue: &Issue,
        candidates: &'a [LawyerProfile],
    ) -> Vec<MatchResult<'a>> {
        if candidates.is_empty() {
            return Vec::new();
        }

        // Stages 1 & 2: Score candidates independently
        let scored: Vec<MatchResult<'a>> = if candidates.len() >= self.options.parallel_threshold {
            candidates
                .par_iter()
                .enumerate()
                .map(|(position, lawyer)| self.score_candidate(issue, lawyer).at_position(position))
                .collect()
        } else {
            candidates
                .iter()
                .enumerate()
                .map(|(position, lawyer)| self.score_candidate(issue, lawyer).at_position(position))
                .collect()
        };

        // Stage 3: Hard filter
        let mut matches: Vec<MatchResult<'a>> = scored
            .into_iter()
            .filter(|result| match check_eligibility(result, self.options.min_score) {
                Eligibility::Eligible => true,
                verdict => {
                    tracing::debug!(
                        "Excluding lawyer {} ({:?}, score {:.2})",
                        result.lawyer.id,
                        verdict,
                        result.overall_score
                    );
                    false
                }
            })
            .collect();

        // Stage 4: Rank and limit
        rank(&mut matches);
        if let Some(limit) = self.options.limit {
            matches.truncate(limit);
        }

        tracing::debug!(
            "Matched {} of {} lawyers for {} issue",
            matches.len(),
            candidates.len(),
            issue.category
        );

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

/// Rank `candidates` for `issue` with the default weights and options
pub fn match_lawyers<'a>(issue: &Issue, candidates: &'a [LawyerProfile]) -> Vec<MatchResult<'a>> {
    Matcher::with_default_weights().match_lawyers(issue, candidates)
}
