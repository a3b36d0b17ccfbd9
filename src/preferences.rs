//! User preferences, persisted as TOML.

use std::path::Path;

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::catalog::{DEFAULT_SEQUENCE_ID, DEFAULT_WORD_LIST_ID};

/// Sequence id recorded when the user typed their own letters.
pub const USER_SEQUENCE_ID: &str = "user";

/// How session exports are named.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct ExportSettings {
    /// Append a timestamp to the file name.
    include_timestamp: bool,
    /// File name stem, without extension.
    default_filename: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            default_filename: "binary-words".to_string(),
        }
    }
}

/// Persisted user preferences.
///
/// Missing fields fall back to their defaults when loading.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
#[serde(default)]
pub struct Preferences {
    /// Last selected word list.
    selected_word_list_id: String,
    /// Last selected letter sequence.
    selected_sequence_id: String,
    /// Letters typed by the user, used when the sequence id is `user`.
    custom_sequence: Option<String>,
    /// Whether psychological profiling is switched on.
    enable_psychological_profiling: bool,
    /// Export naming.
    export_settings: ExportSettings,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            selected_word_list_id: DEFAULT_WORD_LIST_ID.to_string(),
            selected_sequence_id: DEFAULT_SEQUENCE_ID.to_string(),
            custom_sequence: None,
            enable_psychological_profiling: false,
            export_settings: ExportSettings::default(),
        }
    }
}

impl Preferences {
    /// Loads preferences from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading preferences from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read preferences: {}", e)))?;

        let prefs: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse preferences: {}", e)))?;

        info!(list = %prefs.selected_word_list_id, sequence = %prefs.selected_sequence_id, "Preferences loaded");
        Ok(prefs)
    }

    /// Loads preferences, or returns defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No preferences file, using defaults");
            Ok(Self::default())
        }
    }

    /// Writes preferences to a TOML file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize preferences: {}", e)))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::new(format!("Failed to write preferences: {}", e)))?;
        debug!("Preferences saved");
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
