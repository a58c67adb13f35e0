//! Expense service
//!
//! Validates expenses before they reach storage and resolves owners by
//! username.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, UserProfile};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    fn owner(&self, username: &str) -> TrackerResult<UserProfile> {
        self.storage
            .users
            .get_by_username(username)?
            .ok_or_else(|| TrackerError::user_not_found(username))
    }

    /// Record a new expense for `username`
    pub fn add(
        &self,
        username: &str,
        description: &str,
        amount: f64,
        category: &str,
    ) -> TrackerResult<Expense> {
        let owner = self.owner(username)?;
        let expense = Expense::new(owner.id, description, amount, category);

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        tracing::info!(
            user = %owner.username,
            expense = %expense.id,
            amount = expense.amount,
            category = %expense.category,
            "Expense added"
        );
        Ok(expense)
    }

    /// List a user's expenses, oldest first
    pub fn list(&self, username: &str) -> TrackerResult<Vec<Expense>> {
        let owner = self.owner(username)?;
        let mut expenses = self.storage.expenses.get_by_owner(owner.id)?;
        expenses.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(expenses)
    }

    /// Delete an expense by full or short ID
    pub fn delete(&self, identifier: &str) -> TrackerResult<Expense> {
        let expense = self
            .storage
            .expenses
            .find(identifier)?
            .ok_or_else(|| TrackerError::expense_not_found(identifier))?;

        self.storage.expenses.delete(expense.id)?;
        self.storage.expenses.save()?;

        tracing::info!(expense = %expense.id, "Expense deleted");
        Ok(expense)
    }
}
