//! Property-based tests for the analytics engine.
//!
//! These tests verify invariants hold for arbitrary expense sets using
//! proptest.

use proptest::prelude::*;

use expense_tracker::analytics::{aggregate, percentages_of, progress, AnalyticsEngine};
use expense_tracker::models::{BudgetParameters, Expense, UserId};

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_amount() -> impl Strategy<Value = f64> {
    (1u64..10_000_000u64).prop_map(|cents| cents as f64 / 100.0)
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Food".to_string()),
        Just("Utilities".to_string()),
        Just("Entertainment".to_string()),
        Just("Shopping".to_string()),
        Just("Transport".to_string()),
        "[A-Z][a-z]{2,10}",
    ]
}

fn arb_expenses() -> impl Strategy<Value = Vec<Expense>> {
    let owner = UserId::new();
    prop::collection::vec((arb_amount(), arb_category()), 0..40).prop_map(move |entries| {
        entries
            .into_iter()
            .map(|(amount, category)| Expense::new(owner, "Item", amount, category))
            .collect()
    })
}

fn arb_budget() -> impl Strategy<Value = BudgetParameters> {
    (0u64..1_000_000u64, 0u64..1_000_000u64)
        .prop_map(|(income, limit)| BudgetParameters::new(income as f64, limit as f64))
}

// ============================================================================
// Breakdown and percentages
// ============================================================================

proptest! {
    #[test]
    fn breakdown_total_matches_records(records in arb_expenses()) {
        let breakdown = aggregate(&records);
        let total: f64 = breakdown.values().sum();
        let expected: f64 = records.iter().map(|e| e.amount).sum();

        prop_assert!((total - expected).abs() < 1e-6);
        prop_assert!(breakdown.values().all(|v| *v > 0.0));
    }

    #[test]
    fn percentages_sum_to_hundred(records in arb_expenses()) {
        let breakdown = aggregate(&records);
        let percentages = percentages_of(&breakdown);

        if breakdown.is_empty() {
            prop_assert!(percentages.is_empty());
        } else {
            let sum: f64 = percentages.values().sum();
            let tolerance = 0.01 * percentages.len() as f64 + 1e-9;
            prop_assert!((sum - 100.0).abs() <= tolerance, "sum was {}", sum);
            prop_assert_eq!(
                percentages.keys().collect::<Vec<_>>(),
                breakdown.keys().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn percentages_are_bounded(records in arb_expenses()) {
        let percentages = percentages_of(&aggregate(&records));
        prop_assert!(percentages.values().all(|p| (0.0..=100.0).contains(p)));
    }
}

// ============================================================================
// Budget progress
// ============================================================================

proptest! {
    #[test]
    fn remaining_is_limit_minus_spent(spent in arb_amount(), budget in arb_budget()) {
        let p = progress(spent, budget.monthly_income, budget.monthly_expense_limit);
        prop_assert_eq!(p.remaining_budget, budget.monthly_expense_limit - spent);
    }

    #[test]
    fn non_positive_denominators_give_zero(spent in arb_amount(), negative in -1_000_000i64..=0) {
        let p = progress(spent, negative as f64, negative as f64);
        prop_assert_eq!(p.percentage_of_income, 0.0);
        prop_assert_eq!(p.percentage_of_limit, 0.0);
    }
}

// ============================================================================
// Engine
// ============================================================================

proptest! {
    #[test]
    fn recommendation_counts(records in arb_expenses(), budget in arb_budget()) {
        let analytics = AnalyticsEngine::new().compute(&records, Some(budget));

        if budget.is_configured() {
            prop_assert!(analytics.recommendations.len() >= 2);
        } else {
            prop_assert_eq!(analytics.recommendations.len(), 3);
        }
    }

    #[test]
    fn compute_is_deterministic(records in arb_expenses(), budget in arb_budget()) {
        let engine = AnalyticsEngine::new();
        prop_assert_eq!(
            engine.compute(&records, Some(budget)),
            engine.compute(&records, Some(budget))
        );
    }
}
