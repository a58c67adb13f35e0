//! Service layer for the expense tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! validation before writes and username-based lookups.

pub mod analytics;
pub mod expense;
pub mod user;

pub use analytics::AnalyticsService;
pub use expense::ExpenseService;
pub use user::{ProfileDetails, UserService};
