//! JSON export of a user's analytics
//!
//! Wraps the analytics in a document carrying a schema version and the
//! export time.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::analytics::UserAnalytics;
use crate::error::{TrackerError, TrackerResult};
use crate::models::UserProfile;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported analytics document
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    pub username: &'a str,

    pub budget_configured: bool,

    pub analytics: &'a UserAnalytics,
}

impl<'a> AnalyticsExport<'a> {
    pub fn new(user: &'a UserProfile, analytics: &'a UserAnalytics) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            username: &user.username,
            budget_configured: user.budget.is_configured(),
            analytics,
        }
    }
}

/// Write analytics for `user` as pretty-printed JSON
pub fn export_analytics_json<W: Write>(
    user: &UserProfile,
    analytics: &UserAnalytics,
    mut writer: W,
) -> TrackerResult<()> {
    let export = AnalyticsExport::new(user, analytics);
    serde_json::to_writer_pretty(&mut writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
