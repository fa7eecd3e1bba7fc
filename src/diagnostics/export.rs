// SPDX-License-Identifier: MPL-2.0
//! JSON report format and file export helpers.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DiagnosticEvent;
use crate::error::Result;

/// A snapshot of the event log, ready to be serialized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticReport {
    /// Random id so reports can be told apart when collected.
    pub report_id: String,
    /// Version of this crate that produced the report.
    pub crate_version: String,
    pub generated_at: DateTime<Utc>,
    pub collection_started_at: DateTime<Utc>,
    pub event_count: usize,
    pub events: Vec<DiagnosticEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(collection_started_at: DateTime<Utc>, events: Vec<DiagnosticEvent>) -> Self {
        Self {
            report_id: Uuid::new_v4().to_string(),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: Utc::now(),
            collection_started_at,
            event_count: events.len(),
            events,
        }
    }

    /// Pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an export error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Default report filename: `valet_state_diagnostics_YYYYMMDD_HHMMSS.json`,
/// using local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!(
        "valet_state_diagnostics_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Writes `content` to `path` via a sibling temp file and a rename.
///
/// # Errors
///
/// Returns the underlying I/O error; the temp file is removed on failure.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    let result = fs::write(&temp_path, content).and_then(|()| fs::rename(&temp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}
