//! Analytics service
//!
//! Looks up a user's budget parameters and runs the analytics engine over
//! their expenses.

use crate::analytics::{AnalyticsEngine, UserAnalytics};
use crate::error::{TrackerError, TrackerResult};
use crate::models::UserProfile;
use crate::storage::Storage;

/// Service producing per-user analytics
pub struct AnalyticsService<'a> {
    storage: &'a Storage,
    engine: AnalyticsEngine,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new analytics service
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            engine: AnalyticsEngine::new(),
        }
    }

    /// Analytics for `username`
    ///
    /// An unknown user is an error; a store that cannot provide the expense
    /// snapshot yields fallback analytics.
    pub fn for_user(&self, username: &str) -> TrackerResult<(UserProfile, UserAnalytics)> {
        let user = self
            .storage
            .users
            .get_by_username(username)?
            .ok_or_else(|| TrackerError::user_not_found(username))?;

        let analytics = self.engine.analyze(self.storage, user.id, Some(user.budget));
        Ok((user, analytics))
    }
}
