//! Analytics CLI command
//!
//! Prints a user's analytics to the terminal or writes them in one of the
//! export formats, either to stdout or to a file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::{OutputFormat, Settings};
use crate::display::format_analytics;
use crate::error::{TrackerError, TrackerResult};
use crate::export::{export_analytics_csv, export_analytics_json, export_analytics_yaml};
use crate::services::AnalyticsService;
use crate::storage::Storage;

/// Handle `analytics <username>`
pub fn handle_analytics_command(
    storage: &Storage,
    settings: &Settings,
    username: &str,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> TrackerResult<()> {
    let (user, analytics) = AnalyticsService::new(storage).for_user(username)?;
    let format = format.unwrap_or(settings.default_output);

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        OutputFormat::Terminal => {
            let report = format_analytics(&user, &analytics, &settings.currency_symbol);
            writer
                .write_all(report.as_bytes())
                .map_err(|e| TrackerError::Export(e.to_string()))?;
        }
        OutputFormat::Csv => export_analytics_csv(&analytics, &mut writer)?,
        OutputFormat::Json => export_analytics_json(&user, &analytics, &mut writer)?,
        OutputFormat::Yaml => export_analytics_yaml(&user, &analytics, &mut writer)?,
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    if let Some(path) = output {
        eprintln!("Analytics for {} written to: {}", user.username, path.display());
    }

    Ok(())
}
