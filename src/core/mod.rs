// Core algorithm exports
pub mod criteria;
pub mod filters;
pub mod matcher;
pub mod ranking;
pub mod scoring;

pub use criteria::{
    availability_score, case_type_score, clamp_score, client_profile_score, pricing_score,
    specialization_score, success_rate_score,
};
pub use filters::{check_eligibility, Eligibility};
pub use matcher::{match_lawyers, MatchOptions, Matcher};
pub use ranking::{compare_results, rank};
pub use scoring::{aggregate, calculate_match_score, score_breakdown};
