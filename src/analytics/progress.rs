//! Budget progress
//!
//! Compares total spending against the user's monthly income and limit.

use serde::Serialize;

use super::round2;

/// Spending measured against the budget parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetProgress {
    pub total_spent: f64,
    pub monthly_income: f64,
    pub expense_limit: f64,
    /// `expense_limit - total_spent`; negative when over budget
    pub remaining_budget: f64,
    /// Share of income spent (0 when income is not positive)
    pub percentage_of_income: f64,
    /// Share of the limit spent (0 when the limit is not positive)
    pub percentage_of_limit: f64,
}

impl BudgetProgress {
    /// All-zero progress used when no data is available
    pub fn zeroed() -> Self {
        Self {
            total_spent: 0.0,
            monthly_income: 0.0,
            expense_limit: 0.0,
            remaining_budget: 0.0,
            percentage_of_income: 0.0,
            percentage_of_limit: 0.0,
        }
    }

    pub fn is_over_limit(&self) -> bool {
        self.remaining_budget < 0.0
    }
}

/// Compute budget progress
pub fn progress(total_spent: f64, income: f64, limit: f64) -> BudgetProgress {
    BudgetProgress {
        total_spent,
        monthly_income: income,
        expense_limit: limit,
        remaining_budget: limit - total_spent,
        percentage_of_income: share(total_spent, income),
        percentage_of_limit: share(total_spent, limit),
    }
}

fn share(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        round2(part / whole * 100.0)
    } else {
        0.0
    }
}
