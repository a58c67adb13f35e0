//! Storage initialization
//!
//! Handles first-run setup and the optional sample data set.

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;
use crate::models::{BudgetParameters, Expense, UserProfile};

use super::expenses::ExpenseData;
use super::file_io::write_json_atomic;
use super::users::UserData;

/// Username of the sample user created by `init --sample`
pub const SAMPLE_USERNAME: &str = "demo";

/// Initialize storage for a fresh installation
///
/// With `with_sample_data`, a `demo` user and three sample expenses are
/// written, but only when no expense or user file exists yet.
/// Returns whether sample data was written.
pub fn initialize_storage(paths: &TrackerPaths, with_sample_data: bool) -> TrackerResult<bool> {
    paths.ensure_directories()?;

    if !with_sample_data || paths.expenses_file().exists() || paths.users_file().exists() {
        return Ok(false);
    }

    create_sample_data(paths)?;
    Ok(true)
}

fn create_sample_data(paths: &TrackerPaths) -> TrackerResult<()> {
    let mut user = UserProfile::new(SAMPLE_USERNAME);
    user.first_name = Some("Demo".into());
    user.last_name = Some("User".into());
    user.set_budget(BudgetParameters::new(1000.0, 500.0));

    let expenses = vec![
        Expense::new(user.id, "Groceries", 150.75, "Food"),
        Expense::new(user.id, "Electricity Bill", 89.99, "Utilities"),
        Expense::new(user.id, "Dinner", 45.50, "Food"),
    ];

    tracing::info!(count = expenses.len(), user = SAMPLE_USERNAME, "Adding sample expenses");

    write_json_atomic(paths.users_file(), &UserData { users: vec![user] })?;
    write_json_atomic(paths.expenses_file(), &ExpenseData { expenses })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_without_sample_data() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!initialize_storage(&paths, false).unwrap());
        assert!(paths.data_dir().exists());
        assert!(!paths.expenses_file().exists());
    }

    #[test]
    fn test_sample_data_loads() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(initialize_storage(&paths, true).unwrap());

        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        let user = storage.users.get_by_username(SAMPLE_USERNAME).unwrap().unwrap();
        assert!(user.budget.is_configured());
        assert_eq!(storage.expenses.get_by_owner(user.id).unwrap().len(), 3);
    }

    #[test]
    fn test_sample_data_not_written_twice() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(initialize_storage(&paths, true).unwrap());
        assert!(!initialize_storage(&paths, true).unwrap());
    }
}
