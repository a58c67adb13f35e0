//! Recommendation rules
//!
//! Rules are evaluated in a fixed order and each one fires independently,
//! except that an unconfigured budget stops evaluation after the generic
//! tips. The output order is the evaluation order, not a severity ranking.

use serde::{Serialize, Serializer};
use std::fmt;

use super::aggregate::CategoryBreakdown;
use super::percentages::CategoryPercentages;
use super::progress::BudgetProgress;

/// Spending above this share of income triggers a warning
pub const HIGH_INCOME_SHARE: f64 = 0.8;

/// Spending below this share of income earns praise
pub const LOW_INCOME_SHARE: f64 = 0.5;

/// Any category above this percentage of total spending is flagged
pub const DOMINANT_CATEGORY_PERCENT: f64 = 40.0;

/// Category-specific percentage thresholds
pub const ENTERTAINMENT_PERCENT: f64 = 20.0;
pub const SHOPPING_PERCENT: f64 = 25.0;
pub const FOOD_PERCENT: f64 = 30.0;

/// One advisory message
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    TrackDaily,
    ReviewWeekly,
    ConfigureBudget,
    HighIncomeShare,
    LimitExceeded,
    DominantCategory { category: String, percentage: f64 },
    Entertainment,
    Shopping,
    Food,
    UnderHalfOfIncome,
    /// Sole entry of the fallback list when analytics could not be computed
    StartTracking,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrackDaily => write!(f, "💡 Track your expenses daily for better insights"),
            Self::ReviewWeekly => write!(f, "📊 Review your spending patterns weekly"),
            Self::ConfigureBudget => write!(
                f,
                "ℹ️ Set up your monthly income and expense limit for personalized recommendations"
            ),
            Self::HighIncomeShare => write!(
                f,
                "⚠️ You're spending over 80% of your income. Consider reducing non-essential expenses."
            ),
            Self::LimitExceeded => write!(
                f,
                "🚨 You've exceeded your monthly expense limit! Immediate action needed."
            ),
            Self::DominantCategory {
                category,
                percentage,
            } => write!(
                f,
                "📊 Your {} spending is {:.2}% of total. This seems high - consider budgeting for this category.",
                category, percentage
            ),
            Self::Entertainment => write!(
                f,
                "🎬 Entertainment spending is high. Look for free alternatives."
            ),
            Self::Shopping => write!(
                f,
                "🛍️ Shopping expenses are significant. Consider a 24-hour cooling off period before purchases."
            ),
            Self::Food => write!(
                f,
                "🍽️ Food expenses are substantial. Meal planning could help reduce costs."
            ),
            Self::UnderHalfOfIncome => write!(
                f,
                "✅ Great job! You're spending less than 50% of your income."
            ),
            Self::StartTracking => write!(
                f,
                "💡 Start tracking your expenses to get personalized recommendations"
            ),
        }
    }
}

impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Ordered advisory messages
pub type RecommendationList = Vec<Recommendation>;

/// The list returned when analytics could not be computed
pub fn fallback_recommendations() -> RecommendationList {
    vec![Recommendation::StartTracking]
}

/// Evaluate the recommendation rules
pub fn recommend(
    _breakdown: &CategoryBreakdown,
    percentages: &CategoryPercentages,
    progress: &BudgetProgress,
    budget_configured: bool,
) -> RecommendationList {
    let mut out = vec![Recommendation::TrackDaily, Recommendation::ReviewWeekly];

    if !budget_configured {
        out.push(Recommendation::ConfigureBudget);
        return out;
    }

    let spent = progress.total_spent;
    let income = progress.monthly_income;

    if spent > income * HIGH_INCOME_SHARE {
        out.push(Recommendation::HighIncomeShare);
    }

    if spent > progress.expense_limit {
        out.push(Recommendation::LimitExceeded);
    }

    for (category, &percentage) in percentages {
        if percentage > DOMINANT_CATEGORY_PERCENT {
            out.push(Recommendation::DominantCategory {
                category: category.clone(),
                percentage,
            });
        }
    }

    let share = |label: &str| percentages.get(label).copied().unwrap_or(0.0);

    if share("Entertainment") > ENTERTAINMENT_PERCENT {
        out.push(Recommendation::Entertainment);
    }
    if share("Shopping") > SHOPPING_PERCENT {
        out.push(Recommendation::Shopping);
    }
    if share("Food") > FOOD_PERCENT {
        out.push(Recommendation::Food);
    }

    if spent < income * LOW_INCOME_SHARE {
        out.push(Recommendation::UnderHalfOfIncome);
    }

    out
}
