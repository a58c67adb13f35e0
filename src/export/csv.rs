//! CSV export of a user's analytics
//!
//! One row per category followed by the budget figures and the
//! recommendations, all in a `section,key,value,percentage` layout so the
//! file opens cleanly in a spreadsheet.

use std::io::Write;

use crate::analytics::UserAnalytics;
use crate::error::{TrackerError, TrackerResult};

fn export_err<E: std::fmt::Display>(e: E) -> TrackerError {
    TrackerError::Export(e.to_string())
}

/// Write `analytics` as CSV
pub fn export_analytics_csv<W: Write>(analytics: &UserAnalytics, writer: W) -> TrackerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["section", "key", "value", "percentage"])
        .map_err(export_err)?;

    for (category, amount) in &analytics.category_spending {
        let pct = analytics
            .category_percentages
            .get(category)
            .copied()
            .unwrap_or(0.0);
        csv.write_record([
            "category",
            category.as_str(),
            &format!("{:.2}", amount),
            &format!("{:.2}", pct),
        ])
        .map_err(export_err)?;
    }

    let progress = &analytics.progress;
    let budget_rows = [
        ("total_spent", progress.total_spent, None),
        ("monthly_income", progress.monthly_income, None),
        ("expense_limit", progress.expense_limit, None),
        ("remaining_budget", progress.remaining_budget, None),
        (
            "spent_of_income",
            progress.total_spent,
            Some(progress.percentage_of_income),
        ),
        (
            "spent_of_limit",
            progress.total_spent,
            Some(progress.percentage_of_limit),
        ),
    ];
    for (key, value, pct) in budget_rows {
        csv.write_record([
            "budget",
            key,
            &format!("{:.2}", value),
            &pct.map(|p| format!("{:.2}", p)).unwrap_or_default(),
        ])
        .map_err(export_err)?;
    }

    for (i, recommendation) in analytics.recommendations.iter().enumerate() {
        csv.write_record([
            "recommendation",
            &(i + 1).to_string(),
            &recommendation.to_string(),
            "",
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::AnalyticsEngine;
    use crate::models::{BudgetParameters, Expense, UserId};

    fn export(analytics: &UserAnalytics) -> String {
        let mut buffer = Vec::new();
        export_analytics_csv(analytics, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_category_rows() {
        let owner = UserId::new();
        let records = vec![
            Expense::new(owner, "Groceries", 150.75, "Food"),
            Expense::new(owner, "Dinner", 45.5, "Food"),
            Expense::new(owner, "Electricity Bill", 89.99, "Utilities"),
        ];
        let analytics =
            AnalyticsEngine::new().compute(&records, Some(BudgetParameters::new(1000.0, 500.0)));

        let output = export(&analytics);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "section,key,value,percentage");
        assert_eq!(lines[1], "category,Food,196.25,68.56");
        assert_eq!(lines[2], "category,Utilities,89.99,31.44");
        assert!(output.contains("budget,remaining_budget,213.76,"));
        assert!(output.contains("budget,spent_of_limit,286.24,57.25"));
    }

    #[test]
    fn test_recommendation_rows_are_numbered() {
        let analytics = AnalyticsEngine::new().compute(&[], None);
        let output = export(&analytics);

        let rows: Vec<&str> = output
            .lines()
            .filter(|l| l.starts_with("recommendation"))
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("recommendation,1,"));
        assert!(rows[2].starts_with("recommendation,3,"));
        assert!(rows[2].contains("Set up your monthly income"));
    }

    #[test]
    fn test_category_with_comma() {
        let owner = UserId::new();
        let records = vec![Expense::new(owner, "Mixed", 10.0, "Food, Drinks")];
        let analytics = AnalyticsEngine::new().compute(&records, None);

        let output = export(&analytics);
        assert!(output.contains("category,\"Food, Drinks\",10.00,100.00"));
    }
}
