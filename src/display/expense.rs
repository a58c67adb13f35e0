//! Expense and profile display formatting

use crate::models::{Expense, UserProfile};

use super::report::{format_amount, separator, truncate};

/// Format a list of expenses as a register
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<10} {:<28} {:<16} {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&separator(82));
    output.push('\n');

    let mut total = 0.0;
    for expense in expenses {
        total += expense.amount;
        output.push_str(&format!(
            "{:<12} {:<10} {:<28} {:<16} {:>12}\n",
            expense.id,
            expense.created_at.format("%Y-%m-%d"),
            truncate(&expense.description, 28),
            truncate(&expense.category, 16),
            format_amount(expense.amount, symbol)
        ));
    }

    output.push_str(&separator(82));
    output.push('\n');
    output.push_str(&format!(
        "{:<69} {:>12}\n",
        format!("{} expense(s)", expenses.len()),
        format_amount(total, symbol)
    ));
    output
}

/// Format a user profile
pub fn format_profile(user: &UserProfile, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("User:           {} ({})\n", user.username, user.id));
    output.push_str(&format!("Name:           {}\n", user.display_name()));
    if let Some(email) = &user.email {
        output.push_str(&format!("Email:          {}\n", email));
    }
    if user.budget.is_configured() {
        output.push_str(&format!(
            "Monthly Income: {}\n",
            format_amount(user.budget.monthly_income, symbol)
        ));
        output.push_str(&format!(
            "Expense Limit:  {}\n",
            format_amount(user.budget.monthly_expense_limit, symbol)
        ));
    } else {
        output.push_str("Budget:         not configured\n");
    }
    output
}
