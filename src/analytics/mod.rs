//! Spending analytics
//!
//! Four pure stages derive everything shown for a user from a snapshot of
//! their expenses and budget parameters:
//!
//! 1. [`aggregate`]: sum amounts per category
//! 2. [`percentages_of`]: category share of total spending
//! 3. [`progress`]: spending against income and limit
//! 4. [`recommend`]: threshold rules producing advisory messages
//!
//! [`AnalyticsEngine`] wires the stages to an [`ExpenseSource`].

pub mod aggregate;
pub mod engine;
pub mod percentages;
pub mod progress;
pub mod recommendations;
pub mod summary;

pub use aggregate::{aggregate, total_of, CategoryBreakdown};
pub use engine::{AnalyticsEngine, ExpenseSource, UserAnalytics};
pub use percentages::{percentages_of, CategoryPercentages};
pub use progress::{progress, BudgetProgress};
pub use recommendations::{fallback_recommendations, recommend, Recommendation, RecommendationList};
pub use summary::{summarize, ExpenseSummary};

/// Round to two decimal places, halves away from zero
///
/// For the non-negative values produced here this is round-half-up.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
