// Property tests for ranking invariants

use counsel_match::core::{MatchOptions, Matcher};
use counsel_match::models::{Category, Issue, LawyerProfile, PricingModel, Urgency};
use proptest::prelude::*;

// -- Strategy helpers --

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_urgency() -> impl Strategy<Value = Urgency> {
    prop_oneof![
        Just(Urgency::Low),
        Just(Urgency::Normal),
        Just(Urgency::High),
        Just(Urgency::Urgent),
    ]
}

fn arb_pricing() -> impl Strategy<Value = PricingModel> {
    prop_oneof![
        Just(PricingModel::Hourly),
        Just(PricingModel::Fixed),
        Just(PricingModel::Contingency),
    ]
}

fn arb_issue() -> impl Strategy<Value = Issue> {
    (arb_category(), 100.0f64..50_000.0, 100.0f64..50_000.0, arb_urgency(), arb_pricing()).prop_map(
        |(category, a, b, urgency, preferred_pricing)| Issue {
            category,
            budget_min: a.min(b),
            budget_max: a.max(b),
            urgency,
            preferred_pricing,
        },
    )
}

fn arb_lawyer() -> impl Strategy<Value = LawyerProfile> {
    (
        prop::sample::subsequence(Category::ALL.to_vec(), 0..=3),
        0.0f64..1.0,
        any::<bool>(),
        0.0f64..1_000.0,
        (0.0f64..40_000.0, 0.0f64..40_000.0),
        any::<bool>(),
        0.0f64..=100.0,
        (0u32..20, 0u32..20),
    )
        .prop_map(
            |(categories, success, available, hourly, (fa, fb), contingency, pct, (max, current))| {
                LawyerProfile {
                    id: String::new(),
                    name: String::new(),
                    expertise_categories: categories.iter().map(|c| c.label().to_string()).collect(),
                    case_success_rate: success,
                    is_available: available,
                    hourly_rate: hourly,
                    fixed_rate_min: fa.min(fb),
                    fixed_rate_max: fa.max(fb),
                    accepts_contingency: contingency,
                    contingency_percentage: pct,
                    max_cases: max,
                    current_cases: current,
                    rating: 0.0,
                }
            },
        )
}

fn arb_pool() -> impl Strategy<Value = Vec<LawyerProfile>> {
    prop::collection::vec(arb_lawyer(), 0..40).prop_map(|mut pool| {
        for (i, lawyer) in pool.iter_mut().enumerate() {
            lawyer.id = format!("lawyer-{}", i);
        }
        pool
    })
}

fn dominant_for(issue: &Issue) -> LawyerProfile {
    let (lo, hi) = issue.budget_range();
    LawyerProfile {
        id: "dominant".to_string(),
        name: "Dominant".to_string(),
        expertise_categories: vec![issue.category.label().to_string()],
        case_success_rate: 1.0,
        is_available: true,
        hourly_rate: 1.0,
        fixed_rate_min: lo,
        fixed_rate_max: hi,
        accepts_contingency: true,
        contingency_percentage: 0.0,
        max_cases: 50,
        current_cases: 0,
        rating: 5.0,
    }
}

proptest! {
    #[test]
    fn scores_are_positive_and_bounded(issue in arb_issue(), pool in arb_pool()) {
        for m in Matcher::with_default_weights().match_lawyers(&issue, &pool) {
            prop_assert!(m.overall_score > 0.0 && m.overall_score <= 100.0);
            for (_, score) in m.breakdown.iter() {
                prop_assert!((0.0..=100.0).contains(&score));
            }
        }
    }

    #[test]
    fn category_mismatch_never_returned(issue in arb_issue(), pool in arb_pool()) {
        for m in Matcher::with_default_weights().match_lawyers(&issue, &pool) {
            prop_assert!(m.lawyer.handles(issue.category));
            prop_assert_eq!(m.breakdown.case_type, 100.0);
        }
    }

    #[test]
    fn results_are_sorted(issue in arb_issue(), pool in arb_pool()) {
        let matches = Matcher::with_default_weights().match_lawyers(&issue, &pool);
        for pair in matches.windows(2) {
            prop_assert!(pair[0].overall_score >= pair[1].overall_score);
        }
    }

    #[test]
    fn dominant_candidate_is_first(issue in arb_issue(), pool in arb_pool(), at in 0usize..40) {
        let mut pool = pool;
        let at = at.min(pool.len());
        pool.insert(at, dominant_for(&issue));

        let matches = Matcher::with_default_weights().match_lawyers(&issue, &pool);
        prop_assert_eq!(matches[0].lawyer.id.as_str(), "dominant");
    }

    #[test]
    fn reversal_only_changes_full_ties(issue in arb_issue(), pool in arb_pool()) {
        let matcher = Matcher::with_default_weights();
        let mut reversed = pool.clone();
        reversed.reverse();

        let forward = matcher.match_lawyers(&issue, &pool);
        let backward = matcher.match_lawyers(&issue, &reversed);
        prop_assert_eq!(forward.len(), backward.len());

        // Same score, success rate and load at every rank; only identities of
        // fully tied lawyers may swap
        for (f, b) in forward.iter().zip(backward.iter()) {
            prop_assert_eq!(f.overall_score, b.overall_score);
            prop_assert_eq!(f.lawyer.success_rate(), b.lawyer.success_rate());
            prop_assert_eq!(f.lawyer.current_cases, b.lawyer.current_cases);
        }
    }

    #[test]
    fn parallel_and_sequential_agree(issue in arb_issue(), pool in arb_pool()) {
        let sequential = Matcher::with_default_weights().with_options(MatchOptions {
            parallel_threshold: usize::MAX,
            ..Default::default()
        });
        let parallel = Matcher::with_default_weights().with_options(MatchOptions {
            parallel_threshold: 0,
            ..Default::default()
        });
        prop_assert_eq!(
            sequential.match_lawyers(&issue, &pool),
            parallel.match_lawyers(&issue, &pool)
        );
    }
}
