//! Export of analytics reports
//!
//! - CSV: category breakdown, budget figures and recommendations
//! - JSON: the full analytics document with schema versioning
//! - YAML: the same document in a human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_analytics_csv;
pub use json::{export_analytics_json, AnalyticsExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_analytics_yaml;
