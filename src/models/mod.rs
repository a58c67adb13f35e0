//! Core data models for the expense tracker
//!
//! Expenses, user profiles and their budget parameters.

pub mod expense;
pub mod ids;
pub mod user;

pub use expense::{Expense, ExpenseValidationError};
pub use ids::{ExpenseId, UserId};
pub use user::{BudgetParameters, BudgetValidationError, UserProfile, UserValidationError};
