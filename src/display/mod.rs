//! Display formatting for terminal output

pub mod analytics;
pub mod expense;
pub mod report;

pub use analytics::format_analytics;
pub use expense::{format_expense_list, format_profile};
pub use report::{format_amount, format_percentage};
