//! Headline statistics shown next to the category breakdown

use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::Expense;

/// Count, total, distinct categories and average of a set of expenses
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: f64,
    pub category_count: usize,
    /// Zero when there are no expenses
    pub average: f64,
}

/// Summarize a snapshot of expenses
pub fn summarize(records: &[Expense]) -> ExpenseSummary {
    let total: f64 = records.iter().map(|e| e.amount).sum();
    let categories: BTreeSet<&str> = records.iter().map(|e| e.category.as_str()).collect();
    let average = if records.is_empty() {
        0.0
    } else {
        total / records.len() as f64
    };

    ExpenseSummary {
        count: records.len(),
        total,
        category_count: categories.len(),
        average,
    }
}
