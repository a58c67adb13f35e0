//! Expense repository for JSON storage
//!
//! Manages loading and saving expenses to expenses.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::analytics::ExpenseSource;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId, UserId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct ExpenseData {
    pub(crate) expenses: Vec<Expense>,
}

/// Repository for expense persistence, indexed by owner
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<HashMap<ExpenseId, Expense>>,
    /// Index: owner_id -> expense ids, in insertion order
    by_owner: RwLock<HashMap<UserId, Vec<ExpenseId>>>,
}

fn lock_error<E: std::fmt::Display>(e: E) -> TrackerError {
    TrackerError::Storage(format!("Failed to acquire expense lock: {}", e))
}

/// Oldest first, so listings and exports read chronologically
fn sort_chronologically(expenses: &mut [Expense]) {
    expenses.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_owner: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk and rebuild the owner index
    pub fn load(&self) -> TrackerResult<()> {
        let mut file_data: ExpenseData = read_json(&self.path)?;
        sort_chronologically(&mut file_data.expenses);

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        data.clear();
        by_owner.clear();

        for expense in file_data.expenses {
            by_owner.entry(expense.owner_id).or_default().push(expense.id);
            data.insert(expense.id, expense);
        }

        tracing::debug!(count = data.len(), "Loaded expenses");
        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> TrackerResult<()> {
        let data = self.data.read().map_err(lock_error)?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        sort_chronologically(&mut expenses);

        write_json_atomic(&self.path, &ExpenseData { expenses })
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Find an expense by full UUID or short display ID (`exp-xxxxxxxx`)
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<Expense>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.values().find(|e| e.id.matches(identifier)).cloned())
    }

    /// Get all expenses
    pub fn get_all(&self) -> TrackerResult<Vec<Expense>> {
        let data = self.data.read().map_err(lock_error)?;
        let mut expenses: Vec<_> = data.values().cloned().collect();
        sort_chronologically(&mut expenses);
        Ok(expenses)
    }

    /// Get a snapshot of one owner's expenses
    pub fn get_by_owner(&self, owner_id: UserId) -> TrackerResult<Vec<Expense>> {
        let data = self.data.read().map_err(lock_error)?;
        let by_owner = self.by_owner.read().map_err(lock_error)?;

        let ids = by_owner.get(&owner_id).map(|v| v.as_slice()).unwrap_or(&[]);
        Ok(ids.iter().filter_map(|id| data.get(id).cloned()).collect())
    }

    /// Insert or update an expense
    pub fn upsert(&self, expense: Expense) -> TrackerResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        if let Some(old) = data.get(&expense.id) {
            if let Some(ids) = by_owner.get_mut(&old.owner_id) {
                ids.retain(|&id| id != expense.id);
            }
        }

        by_owner.entry(expense.owner_id).or_default().push(expense.id);
        data.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_owner = self.by_owner.write().map_err(lock_error)?;

        let removed = data.remove(&id);
        if let Some(expense) = &removed {
            if let Some(ids) = by_owner.get_mut(&expense.owner_id) {
                ids.retain(|&other| other != id);
            }
        }
        Ok(removed)
    }

    /// Number of stored expenses
    pub fn count(&self) -> TrackerResult<usize> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }
}

impl ExpenseSource for ExpenseRepository {
    fn expenses_for_owner(&self, owner: UserId) -> TrackerResult<Vec<Expense>> {
        self.get_by_owner(owner)
            .map_err(|e| TrackerError::InputUnavailable(e.to_string()))
    }
}
