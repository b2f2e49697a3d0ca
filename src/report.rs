/// Diagnosis report export
///
/// Flattens the on-screen result into a JSON document the user can save
/// from the report screen. Nothing here is persisted automatically; a
/// file is only written when the user picks a destination.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::task;

use crate::state::diagnosis::Diagnosis;

/// Errors from exporting a report
#[derive(Error, Debug, Clone)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialize(String),
    #[error("Failed to write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
    #[error("Task join error: {0}")]
    Task(String),
}

/// The exported form of one analysis result
#[derive(Serialize, Debug, Clone)]
pub struct Report {
    pub condition: String,
    pub confidence: u8,
    pub details: String,
    pub is_normal: bool,
    /// Filename of the analyzed upload
    pub source_filename: String,
    pub generated_at: DateTime<Utc>,
}

impl Report {
    /// Assemble a report from the current diagnosis and scan filename
    pub fn new(diagnosis: &Diagnosis, source_filename: &str) -> Self {
        Self {
            condition: diagnosis.condition.to_string(),
            confidence: diagnosis.confidence,
            details: diagnosis.details.to_string(),
            is_normal: diagnosis.is_normal,
            source_filename: source_filename.to_string(),
            generated_at: Utc::now(),
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::Serialize(e.to_string()))
    }
}

/// Write a report to disk as JSON, returning the destination path
pub async fn export_report(report: Report, path: PathBuf) -> Result<PathBuf, ReportError> {
    task::spawn_blocking(move || export_report_blocking(&report, &path).map(|_| path))
        .await
        .map_err(|e| ReportError::Task(e.to_string()))?
}

/// Blocking implementation of report export
fn export_report_blocking(report: &Report, path: &Path) -> Result<(), ReportError> {
    let json = report.to_json()?;

    std::fs::write(path, json).map_err(|e| ReportError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    println!("📄 Report saved to: {}", path.display());
    Ok(())
}
