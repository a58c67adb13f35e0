//! Percentage distribution of spending across categories

use std::collections::BTreeMap;

use super::aggregate::{total_of, CategoryBreakdown};
use super::round2;

/// Category label -> percentage of total spending (0-100, two decimals)
pub type CategoryPercentages = BTreeMap<String, f64>;

/// Convert a breakdown into percentages of its total
///
/// When the total is zero (no spending) the result is empty; there is no
/// division by zero.
pub fn percentages_of(breakdown: &CategoryBreakdown) -> CategoryPercentages {
    let total = total_of(breakdown);
    if total <= 0.0 {
        return CategoryPercentages::new();
    }

    breakdown
        .iter()
        .map(|(category, amount)| (category.clone(), round2(amount / total * 100.0)))
        .collect()
}
