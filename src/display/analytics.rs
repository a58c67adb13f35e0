//! Terminal rendering of a user's analytics

use crate::analytics::UserAnalytics;
use crate::models::UserProfile;

use super::report::{double_separator, format_amount, format_bar, format_percentage, separator, truncate};

const WIDTH: usize = 64;
const BAR_WIDTH: usize = 20;

/// Render the full analytics report
pub fn format_analytics(user: &UserProfile, analytics: &UserAnalytics, symbol: &str) -> String {
    let mut output = String::new();
    let money = |v: f64| format_amount(v, symbol);

    output.push_str(&format!("Spending Analytics: {}\n", user.display_name()));
    output.push_str(&double_separator(WIDTH));
    output.push('\n');

    if analytics.is_fallback() {
        output.push_str("Unable to load analytics data.\n\n");
        for recommendation in &analytics.recommendations {
            output.push_str(&format!("  {}\n", recommendation));
        }
        return output;
    }

    let summary = &analytics.summary;
    output.push_str(&format!("Expenses:        {}\n", summary.count));
    output.push_str(&format!("Total Spent:     {}\n", money(summary.total)));
    output.push_str(&format!("Categories:      {}\n", summary.category_count));
    output.push_str(&format!("Average Expense: {}\n\n", money(summary.average)));

    output.push_str("Budget Progress\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    let progress = &analytics.progress;
    if user.budget.is_configured() {
        output.push_str(&format!("Monthly Income:  {:>14}\n", money(progress.monthly_income)));
        output.push_str(&format!("Expense Limit:   {:>14}\n", money(progress.expense_limit)));
        output.push_str(&format!(
            "Remaining:       {:>14}{}\n",
            money(progress.remaining_budget),
            if progress.is_over_limit() { "  (over budget)" } else { "" }
        ));
        output.push_str(&format!(
            "Of Income:       {:>14}\n",
            format_percentage(progress.percentage_of_income)
        ));
        output.push_str(&format!(
            "Of Limit:        {:>14}  {}\n\n",
            format_percentage(progress.percentage_of_limit),
            format_bar(progress.percentage_of_limit, 100.0, BAR_WIDTH)
        ));
    } else {
        output.push_str("Budget not configured.\n\n");
    }

    output.push_str(&format!(
        "{:<24} {:>14} {:>9}  {}\n",
        "Category", "Amount", "%", "Share"
    ));
    output.push_str(&separator(WIDTH));
    output.push('\n');

    if analytics.category_spending.is_empty() {
        output.push_str("No expenses recorded.\n");
    } else {
        for (category, amount) in &analytics.category_spending {
            let pct = analytics
                .category_percentages
                .get(category)
                .copied()
                .unwrap_or(0.0);
            output.push_str(&format!(
                "{:<24} {:>14} {:>9}  {}\n",
                truncate(category, 24),
                money(*amount),
                format_percentage(pct),
                format_bar(pct, 100.0, BAR_WIDTH)
            ));
        }
    }

    output.push_str("\nRecommendations\n");
    output.push_str(&separator(WIDTH));
    output.push('\n');
    for recommendation in &analytics.recommendations {
        output.push_str(&format!("  {}\n", recommendation));
    }

    output
}
