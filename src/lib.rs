//! Counsel Match - multi-criteria lawyer matching and ranking engine
//!
//! Given a client's legal issue and a pool of lawyer profiles, scores each
//! lawyer on six criteria, drops those outside the issue's category, and
//! returns the rest ranked with deterministic tie-breaks.

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

// Re-export commonly used types
pub use crate::core::{match_lawyers, Eligibility, MatchOptions, Matcher};
pub use crate::error::MatchError;
pub use crate::models::{
    Category, Criterion, Issue, LawyerProfile, MatchResult, PricingModel, ScoreBreakdown,
    ScoringCurves, ScoringWeights, Urgency,
};
