// ============================================================
// Layer 6 — Run Report Store
// ============================================================
// Saves the outcome of a classification run as pretty JSON:
// how many chunks were sent, which failed and why, and how
// many sentences received labels.
//
// The report is the record of which filings need another run
// after a partial failure.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

use crate::application::classify_use_case::ClassificationReport;

pub struct RunReportStore {
    path: PathBuf,
}

impl RunReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Write the report, replacing any previous one.
    pub fn save(&self, report: &ClassificationReport) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write run report '{}'", self.path.display()))?;
        tracing::info!("Run report saved to '{}'", self.path.display());
        Ok(())
    }
}
