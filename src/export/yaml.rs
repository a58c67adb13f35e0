//! YAML export of a user's analytics

use std::io::Write;

use crate::analytics::UserAnalytics;
use crate::error::{TrackerError, TrackerResult};
use crate::models::UserProfile;

use super::json::AnalyticsExport;

fn export_err<E: std::fmt::Display>(e: E) -> TrackerError {
    TrackerError::Export(e.to_string())
}

/// Write analytics for `user` as YAML, preceded by a comment header
pub fn export_analytics_yaml<W: Write>(
    user: &UserProfile,
    analytics: &UserAnalytics,
    mut writer: W,
) -> TrackerResult<()> {
    let export = AnalyticsExport::new(user, analytics);

    writeln!(writer, "# Spending analytics for {}", export.username).map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(export_err)?;
    Ok(())
}
