//! Category aggregation
//!
//! Groups expenses by their category label and sums the amounts.

use std::collections::BTreeMap;

use crate::models::Expense;

/// Category label -> summed amount, iterated in ascending label order
pub type CategoryBreakdown = BTreeMap<String, f64>;

/// Sum expense amounts per category
///
/// Labels are matched exactly (case-sensitive, no trimming). An empty input
/// yields an empty breakdown.
pub fn aggregate(records: &[Expense]) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::new();
    for expense in records {
        *breakdown.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }
    breakdown
}

/// Total spending across all categories of a breakdown
pub fn total_of(breakdown: &CategoryBreakdown) -> f64 {
    breakdown.values().sum()
}
