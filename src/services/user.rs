//! User service
//!
//! Creates user profiles and maintains their budget parameters.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BudgetParameters, UserProfile};
use crate::storage::Storage;

/// Optional profile details supplied on creation
#[derive(Debug, Clone, Default)]
pub struct ProfileDetails {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// Service for user profile management
pub struct UserService<'a> {
    storage: &'a Storage,
}

impl<'a> UserService<'a> {
    /// Create a new user service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a user with no budget configured
    pub fn create(&self, username: &str) -> TrackerResult<UserProfile> {
        self.create_with_details(username, ProfileDetails::default())
    }

    /// Create a user with optional name and email
    pub fn create_with_details(
        &self,
        username: &str,
        details: ProfileDetails,
    ) -> TrackerResult<UserProfile> {
        if self.storage.users.get_by_username(username)?.is_some() {
            return Err(TrackerError::Duplicate {
                entity_type: "User",
                identifier: username.trim().to_string(),
            });
        }

        let mut user = UserProfile::new(username);
        user.first_name = details.first_name;
        user.last_name = details.last_name;
        user.email = details.email;

        user.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        tracing::info!(user = %user.username, id = %user.id, "User created");
        Ok(user)
    }

    /// Find a user by username
    pub fn find(&self, username: &str) -> TrackerResult<Option<UserProfile>> {
        self.storage.users.get_by_username(username)
    }

    /// Find a user by username, failing if absent
    pub fn get(&self, username: &str) -> TrackerResult<UserProfile> {
        self.find(username)?
            .ok_or_else(|| TrackerError::user_not_found(username))
    }

    /// List all users
    pub fn list(&self) -> TrackerResult<Vec<UserProfile>> {
        self.storage.users.get_all()
    }

    /// Set a user's monthly income and expense limit
    pub fn set_budget(
        &self,
        username: &str,
        budget: BudgetParameters,
    ) -> TrackerResult<UserProfile> {
        budget
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let mut user = self.get(username)?;
        user.set_budget(budget);

        self.storage.users.upsert(user.clone())?;
        self.storage.users.save()?;

        tracing::info!(
            user = %user.username,
            income = budget.monthly_income,
            limit = budget.monthly_expense_limit,
            "Budget updated"
        );
        Ok(user)
    }
}
