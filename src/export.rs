//! Writes session snapshots to JSON files.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{info, instrument};

use crate::engine::{Choice, FilterSession};
use crate::preferences::ExportSettings;

/// A finished or in-progress reading, as written to disk.
#[derive(Debug, Clone, Serialize)]
pub struct SessionExport {
    /// Word list id.
    pub word_list_id: String,
    /// Word list display name.
    pub word_list_name: String,
    /// Letters in the active sequence.
    pub sequence: String,
    /// Choices as a compact string, e.g. `"LRRL"`.
    pub choices: String,
    /// Number of letters used.
    pub step_index: usize,
    /// True once every letter was used.
    pub is_complete: bool,
    /// Left-pattern pool.
    pub left_pool: Vec<String>,
    /// Right-pattern pool.
    pub right_pool: Vec<String>,
    /// When the export was made, if timestamps are enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

impl SessionExport {
    /// Captures the session.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError`] if no word list is bound.
    #[instrument(skip(session))]
    pub fn capture(
        session: &FilterSession,
        exported_at: Option<DateTime<Utc>>,
    ) -> Result<Self, ExportError> {
        let list = session
            .word_list()
            .ok_or_else(|| ExportError::new("Nothing to export: no word list selected"))?;
        let (left_pool, right_pool) = session.pools().into_parts();

        Ok(Self {
            word_list_id: list.id().clone(),
            word_list_name: list.name().clone(),
            sequence: session.letters().to_string(),
            choices: Choice::format_sequence(session.history()),
            step_index: session.step_index(),
            is_complete: session.is_complete(),
            left_pool,
            right_pool,
            exported_at,
        })
    }
}

/// Builds the export file name for a given time.
#[instrument(skip(settings))]
pub fn export_filename(settings: &ExportSettings, now: DateTime<Utc>) -> String {
    if *settings.include_timestamp() {
        format!(
            "{}-{}.json",
            settings.default_filename(),
            now.format("%Y%m%d-%H%M%S")
        )
    } else {
        format!("{}.json", settings.default_filename())
    }
}

/// Writes the session as pretty JSON into `dir` and returns the file path.
#[instrument(skip(session, settings, dir), fields(dir = %dir.as_ref().display()))]
pub fn export_session(
    session: &FilterSession,
    settings: &ExportSettings,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let now = Utc::now();
    let stamp = settings.include_timestamp().then_some(now);
    let export = SessionExport::capture(session, stamp)?;

    let path = dir.as_ref().join(export_filename(settings, now));
    let json = serde_json::to_string_pretty(&export)
        .map_err(|e| ExportError::new(format!("Failed to serialize session: {}", e)))?;
    std::fs::write(&path, json)
        .map_err(|e| ExportError::new(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(path = %path.display(), "Session exported");
    Ok(path)
}

/// Export error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Export error: {} at {}:{}", message, file, line)]
pub struct ExportError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ExportError {
    /// Creates a new export error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
