//! Analytics engine
//!
//! Runs the aggregation, percentage, progress and recommendation stages over
//! one snapshot of a user's expenses. The engine keeps no state between
//! calls.

use serde::Serialize;

use crate::error::TrackerResult;
use crate::models::{BudgetParameters, Expense, UserId};

use super::aggregate::{aggregate, total_of, CategoryBreakdown};
use super::percentages::{percentages_of, CategoryPercentages};
use super::progress::{progress, BudgetProgress};
use super::recommendations::{fallback_recommendations, recommend, RecommendationList};
use super::summary::{summarize, ExpenseSummary};

/// Read-only access to a user's expenses
///
/// Implementations return an owned snapshot; later writes to the store do
/// not affect a snapshot already handed out.
pub trait ExpenseSource {
    fn expenses_for_owner(&self, owner: UserId) -> TrackerResult<Vec<Expense>>;
}

/// Everything derived for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAnalytics {
    pub summary: ExpenseSummary,
    pub category_spending: CategoryBreakdown,
    pub category_percentages: CategoryPercentages,
    pub progress: BudgetProgress,
    pub recommendations: RecommendationList,
}

impl UserAnalytics {
    /// Zeroed analytics with the single fallback recommendation
    pub fn fallback() -> Self {
        Self {
            summary: ExpenseSummary::default(),
            category_spending: CategoryBreakdown::new(),
            category_percentages: CategoryPercentages::new(),
            progress: BudgetProgress::zeroed(),
            recommendations: fallback_recommendations(),
        }
    }

    /// Whether this is the fallback produced after a source failure
    pub fn is_fallback(&self) -> bool {
        self.recommendations == fallback_recommendations()
    }
}

/// Stateless analytics calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Compute analytics from an in-memory snapshot
    ///
    /// A missing budget is treated the same as an unconfigured one.
    pub fn compute(&self, records: &[Expense], budget: Option<BudgetParameters>) -> UserAnalytics {
        let budget = budget.unwrap_or_default();

        let category_spending = aggregate(records);
        let category_percentages = percentages_of(&category_spending);
        let progress = progress(
            total_of(&category_spending),
            budget.monthly_income,
            budget.monthly_expense_limit,
        );
        let recommendations = recommend(
            &category_spending,
            &category_percentages,
            &progress,
            budget.is_configured(),
        );

        UserAnalytics {
            summary: summarize(records),
            category_spending,
            category_percentages,
            progress,
            recommendations,
        }
    }

    /// Fetch a snapshot from `source` and compute analytics, propagating
    /// source failures
    pub fn try_analyze<S: ExpenseSource + ?Sized>(
        &self,
        source: &S,
        owner: UserId,
        budget: Option<BudgetParameters>,
    ) -> TrackerResult<UserAnalytics> {
        let records = source.expenses_for_owner(owner)?;
        let analytics = self.compute(&records, budget);

        tracing::debug!(
            owner = %owner,
            expenses = records.len(),
            categories = analytics.category_spending.len(),
            recommendations = analytics.recommendations.len(),
            "Computed analytics"
        );

        Ok(analytics)
    }

    /// Like [`AnalyticsEngine::try_analyze`], but a failing source yields
    /// [`UserAnalytics::fallback`] instead of an error
    pub fn analyze<S: ExpenseSource + ?Sized>(
        &self,
        source: &S,
        owner: UserId,
        budget: Option<BudgetParameters>,
    ) -> UserAnalytics {
        match self.try_analyze(source, owner, budget) {
            Ok(analytics) => analytics,
            Err(e) => {
                tracing::warn!(owner = %owner, error = %e, "Analytics unavailable, using fallback");
                UserAnalytics::fallback()
            }
        }
    }
}
