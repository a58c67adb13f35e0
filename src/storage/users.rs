//! User repository for JSON storage
//!
//! Manages loading and saving user profiles to users.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{UserId, UserProfile};

use super::file_io::{read_json, write_json_atomic};

/// Serializable user data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(crate) struct UserData {
    pub(crate) users: Vec<UserProfile>,
}

/// Repository for user profile persistence
pub struct UserRepository {
    path: PathBuf,
    data: RwLock<HashMap<UserId, UserProfile>>,
    /// Index: normalized username -> user_id
    by_username: RwLock<HashMap<String, UserId>>,
}

fn lock_error<E: std::fmt::Display>(e: E) -> TrackerError {
    TrackerError::Storage(format!("Failed to acquire user lock: {}", e))
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
            by_username: RwLock::new(HashMap::new()),
        }
    }

    /// Load users from disk
    pub fn load(&self) -> TrackerResult<()> {
        let file_data: UserData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_username = self.by_username.write().map_err(lock_error)?;

        data.clear();
        by_username.clear();

        for user in file_data.users {
            by_username.insert(UserProfile::normalize_username(&user.username), user.id);
            data.insert(user.id, user);
        }

        tracing::debug!(count = data.len(), "Loaded users");
        Ok(())
    }

    /// Save users to disk
    pub fn save(&self) -> TrackerResult<()> {
        let users = self.get_all()?;
        write_json_atomic(&self.path, &UserData { users })
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> TrackerResult<Option<UserProfile>> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// Get a user by username (case-insensitive)
    pub fn get_by_username(&self, username: &str) -> TrackerResult<Option<UserProfile>> {
        let data = self.data.read().map_err(lock_error)?;
        let by_username = self.by_username.read().map_err(lock_error)?;

        Ok(by_username
            .get(&UserProfile::normalize_username(username))
            .and_then(|id| data.get(id).cloned()))
    }

    /// Get all users sorted by username
    pub fn get_all(&self) -> TrackerResult<Vec<UserProfile>> {
        let data = self.data.read().map_err(lock_error)?;
        let mut users: Vec<_> = data.values().cloned().collect();
        users.sort_by_key(|u| UserProfile::normalize_username(&u.username));
        Ok(users)
    }

    /// Insert or update a user
    pub fn upsert(&self, user: UserProfile) -> TrackerResult<()> {
        let mut data = self.data.write().map_err(lock_error)?;
        let mut by_username = self.by_username.write().map_err(lock_error)?;

        if let Some(old) = data.get(&user.id) {
            by_username.remove(&UserProfile::normalize_username(&old.username));
        }

        by_username.insert(UserProfile::normalize_username(&user.username), user.id);
        data.insert(user.id, user);
        Ok(())
    }
}
