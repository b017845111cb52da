// ============================================================
// Layer 6 — JSON Run Report
// ============================================================
// Optionally persists the RunSummary as pretty-printed JSON so
// downstream tooling can read the encoding table and
// missing-value counts without scraping terminal output.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::report::RunSummary;

/// Serialize the run summary to `path` as JSON.
pub fn write_report(path: &Path, summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)
        .context("Cannot serialize run summary")?;

    fs::write(path, json)
        .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

    tracing::info!("Wrote run report to '{}'", path.display());
    Ok(())
}
