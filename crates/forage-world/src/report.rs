//! Rendering simulation outcomes for the results file.

use crate::simulation::MoveRecord;
use forage_core::{Error, ReportFormat, Result};

/// Render move records in the requested format
pub fn render(records: &[MoveRecord], format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(records)),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(records)? + "\n"),
    }
}

pub fn render_text(records: &[MoveRecord]) -> String {
    records
        .iter()
        .map(|record| format!("{record}\n"))
        .collect()
}

/// A rejected input is reported as its message alone
pub fn render_error(err: &Error, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(format!("{err}\n")),
        ReportFormat::Json => {
            let body = serde_json::json!({ "error": err.to_string() });
            Ok(serde_json::to_string_pretty(&body)? + "\n")
        }
    }
}
