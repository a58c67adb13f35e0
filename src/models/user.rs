//! User profile model
//!
//! A user owns expenses and declares the two budget parameters the
//! analytics compare spending against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::UserId;

/// Monthly income and monthly expense limit
///
/// `(0, 0)` is the "not configured" state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetParameters {
    #[serde(default)]
    pub monthly_income: f64,
    #[serde(default)]
    pub monthly_expense_limit: f64,
}

impl BudgetParameters {
    pub fn new(monthly_income: f64, monthly_expense_limit: f64) -> Self {
        Self {
            monthly_income,
            monthly_expense_limit,
        }
    }

    /// Both parameters have been set to a positive value
    pub fn is_configured(&self) -> bool {
        self.monthly_income > 0.0 && self.monthly_expense_limit > 0.0
    }

    /// Validate the parameters
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        for (field, value) in [
            ("monthly income", self.monthly_income),
            ("monthly expense limit", self.monthly_expense_limit),
        ] {
            if !value.is_finite() {
                return Err(BudgetValidationError::NonFinite(field));
            }
            if value < 0.0 {
                return Err(BudgetValidationError::Negative(field));
            }
        }
        Ok(())
    }
}

/// Validation errors for budget parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    Negative(&'static str),
    NonFinite(&'static str),
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative(field) => write!(f, "The {} cannot be negative", field),
            Self::NonFinite(field) => write!(f, "The {} must be a finite number", field),
        }
    }
}

impl std::error::Error for BudgetValidationError {}

/// A user and their budget parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,

    /// Unique login-style handle (compared case-insensitively)
    pub username: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default)]
    pub budget: BudgetParameters,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create a new user with an unconfigured budget
    pub fn new(username: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username: username.into().trim().to_string(),
            first_name: None,
            last_name: None,
            email: None,
            budget: BudgetParameters::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Normalize a username for lookups
    pub fn normalize_username(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Replace the budget parameters
    pub fn set_budget(&mut self, budget: BudgetParameters) {
        self.budget = budget;
        self.updated_at = Utc::now();
    }

    /// "First Last", falling back to the username
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.username.clone(),
        }
    }

    /// Validate the profile
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }

        if self.username.chars().any(char::is_whitespace) {
            return Err(UserValidationError::UsernameWhitespace);
        }

        if let Some(email) = &self.email {
            if !email.contains('@') {
                return Err(UserValidationError::InvalidEmail(email.clone()));
            }
        }

        self.budget.validate().map_err(UserValidationError::Budget)
    }
}

/// Validation errors for user profiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyUsername,
    UsernameWhitespace,
    InvalidEmail(String),
    Budget(BudgetValidationError),
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
            Self::UsernameWhitespace => write!(f, "Username cannot contain whitespace"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::Budget(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for UserValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_configured() {
        assert!(!BudgetParameters::default().is_configured());
        assert!(!BudgetParameters::new(1000.0, 0.0).is_configured());
        assert!(!BudgetParameters::new(0.0, 500.0).is_configured());
        assert!(BudgetParameters::new(1000.0, 500.0).is_configured());
    }

    #[test]
    fn test_budget_validation() {
        assert!(BudgetParameters::new(0.0, 0.0).validate().is_ok());
        assert_eq!(
            BudgetParameters::new(-1.0, 0.0).validate(),
            Err(BudgetValidationError::Negative("monthly income"))
        );
        assert_eq!(
            BudgetParameters::new(10.0, f64::INFINITY).validate(),
            Err(BudgetValidationError::NonFinite("monthly expense limit"))
        );
    }

    #[test]
    fn test_user_validation() {
        assert!(UserProfile::new("alice").validate().is_ok());
        assert_eq!(
            UserProfile::new("   ").validate(),
            Err(UserValidationError::EmptyUsername)
        );
        assert_eq!(
            UserProfile::new("a b").validate(),
            Err(UserValidationError::UsernameWhitespace)
        );

        let mut user = UserProfile::new("bob");
        user.email = Some("not-an-email".into());
        assert!(matches!(
            user.validate(),
            Err(UserValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_display_name() {
        let mut user = UserProfile::new("jdoe");
        assert_eq!(user.display_name(), "jdoe");
        user.first_name = Some("Jane".into());
        user.last_name = Some("Doe".into());
        assert_eq!(user.display_name(), "Jane Doe");
    }

    #[test]
    fn test_budget_defaults_when_missing() {
        let json = format!(
            r#"{{"id":"{}","username":"carol","created_at":"2025-01-01T00:00:00Z","updated_at":"2025-01-01T00:00:00Z"}}"#,
            uuid::Uuid::new_v4()
        );
        let user: UserProfile = serde_json::from_str(&json).unwrap();
        assert!(!user.budget.is_configured());
    }
}
