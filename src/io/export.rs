//! Export a dashboard snapshot to JSON.
//!
//! The export is meant to be easy to consume in notebooks or downstream scripts:
//! latest metrics, chart series (history + projection), target-year cards and
//! insights, stamped with the generation time.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::app::pipeline::DashboardContext;
use crate::error::AppError;

#[derive(Debug, Serialize)]
struct DashboardFile<'a> {
    tool: &'static str,
    generated_at: DateTime<Local>,
    #[serde(flatten)]
    dashboard: &'a DashboardContext,
}

/// Write a dashboard snapshot JSON file.
pub fn write_dashboard_json(path: &Path, ctx: &DashboardContext) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export JSON '{}': {e}", path.display())))?;

    let snapshot = DashboardFile {
        tool: "climate",
        generated_at: Local::now(),
        dashboard: ctx,
    };

    serde_json::to_writer_pretty(file, &snapshot)
        .map_err(|e| AppError::new(2, format!("Failed to write export JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::run_dashboard;
    use crate::domain::DashboardConfig;

    #[test]
    fn export_writes_readable_snapshot() {
        let ctx = run_dashboard(&DashboardConfig::default()).unwrap();
        let path = std::env::temp_dir().join(format!("climate_export_{}.json", std::process::id()));

        write_dashboard_json(&path, &ctx).unwrap();
        let file = File::open(&path).unwrap();
        let json: serde_json::Value = serde_json::from_reader(file).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(json["tool"], "climate");
        assert_eq!(json["seed"], 42);
        assert_eq!(json["metrics"].as_array().map(Vec::len), Some(3));
        assert_eq!(json["charts"][0]["kind"], "temperature");
        assert_eq!(json["cards"][0]["target_year"], 2030);
        assert!(json.get("bundle").is_none());
        assert!(json["insights"].as_array().is_some_and(|a| !a.is_empty()));
    }

    #[test]
    fn export_into_missing_directory_fails() {
        let ctx = run_dashboard(&DashboardConfig::default()).unwrap();
        let path = std::env::temp_dir().join("climate-no-such-dir").join("out.json");
        let err = write_dashboard_json(&path, &ctx).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
