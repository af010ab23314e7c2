// Model exports
pub mod domain;
pub mod lenient;
pub mod results;

pub use domain::{Category, Criterion, Issue, LawyerProfile, PricingModel, ScoringCurves, ScoringWeights, Urgency};
pub use results::{MatchResult, ScoreBreakdown};
