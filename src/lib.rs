//! Expense Tracker - spending analytics and budget recommendations
//!
//! This library records expenses per user, aggregates them by category,
//! measures spending against each user's monthly income and expense limit,
//! and produces advisory recommendations.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and user settings
//! - `error`: Custom error types
//! - `models`: Expenses, user profiles and budget parameters
//! - `storage`: JSON file storage layer
//! - `analytics`: Stateless analytics engine
//! - `services`: Business logic layer
//! - `cli`: Command handlers
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export of analytics
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::analytics::AnalyticsEngine;
//! use expense_tracker::models::{BudgetParameters, Expense, UserId};
//!
//! let owner = UserId::new();
//! let records = vec![Expense::new(owner, "Groceries", 150.75, "Food")];
//! let analytics = AnalyticsEngine::new()
//!     .compute(&records, Some(BudgetParameters::new(1000.0, 500.0)));
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TrackerError;
