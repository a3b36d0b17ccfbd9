//! Application state: catalog, preferences, perform mode, and the session.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use tracing::{info, instrument, warn};

use crate::catalog::{Catalog, CatalogError, DEFAULT_SEQUENCE_ID, DEFAULT_WORD_LIST_ID};
use crate::engine::{Choice, FilterSession, LetterSequence, SequenceError, SessionError, Snapshot};
use crate::export::{ExportError, export_session};
use crate::preferences::{Preferences, USER_SEQUENCE_ID};

/// Everything a front end needs to run a performance.
#[derive(Debug, Clone, Getters)]
pub struct App {
    catalog: Catalog,
    preferences: Preferences,
    session: FilterSession,
    perform_mode: bool,
}

impl App {
    /// Builds the app from a catalog and stored preferences.
    ///
    /// Unknown list or sequence ids fall back to the defaults with a warning,
    /// and the preferences are corrected to match.
    #[instrument(skip(catalog, preferences))]
    pub fn new(catalog: Catalog, preferences: Preferences) -> Self {
        let mut preferences = preferences;

        let letters = match Self::resolve_sequence(&catalog, &preferences) {
            Some(letters) => letters,
            None => {
                warn!(sequence = %preferences.selected_sequence_id(), "Unknown sequence, using default");
                preferences = preferences.with_selected_sequence_id(DEFAULT_SEQUENCE_ID);
                Self::default_letters(&catalog)
            }
        };

        let list = match catalog.word_list(preferences.selected_word_list_id()) {
            Ok(list) => Some(list.clone()),
            Err(e) => {
                warn!(error = %e, "Falling back to default word list");
                preferences = preferences.with_selected_word_list_id(DEFAULT_WORD_LIST_ID);
                catalog.word_list(DEFAULT_WORD_LIST_ID).ok().cloned()
            }
        };

        let session = match list {
            Some(list) => FilterSession::with_word_list(list, letters),
            None => FilterSession::new(letters),
        };

        info!(status = %session.status(), "App ready");
        Self {
            catalog,
            preferences,
            session,
            perform_mode: false,
        }
    }

    fn resolve_sequence(catalog: &Catalog, preferences: &Preferences) -> Option<LetterSequence> {
        let id = preferences.selected_sequence_id();
        if id == USER_SEQUENCE_ID {
            return preferences
                .custom_sequence()
                .as_deref()
                .and_then(|s| LetterSequence::custom(s).ok());
        }
        catalog.sequence(id).ok().map(|s| s.letters().clone())
    }

    fn default_letters(catalog: &Catalog) -> LetterSequence {
        catalog
            .sequence(DEFAULT_SEQUENCE_ID)
            .map(|seq| seq.letters().clone())
            .unwrap_or_default()
    }

    /// Selects a word list by id and records it in the preferences.
    #[instrument(skip(self))]
    pub fn select_word_list(&mut self, id: &str) -> Result<Snapshot, CatalogError> {
        let list = self.catalog.word_list(id)?.clone();
        self.preferences = self.preferences.clone().with_selected_word_list_id(id);
        Ok(self.session.select_word_list(list))
    }

    /// Selects a catalog letter sequence by id and resets the session.
    #[instrument(skip(self))]
    pub fn select_sequence(&mut self, id: &str) -> Result<Snapshot, CatalogError> {
        let letters = self.catalog.sequence(id)?.letters().clone();
        self.preferences = self.preferences.clone().with_selected_sequence_id(id);
        Ok(self.session.use_letters(letters))
    }

    /// Validates and installs user-typed letters (3–50 alphabetic).
    #[instrument(skip(self))]
    pub fn set_custom_sequence(&mut self, input: &str) -> Result<Snapshot, SequenceError> {
        let letters = LetterSequence::custom(input)?;
        self.preferences = self
            .preferences
            .clone()
            .with_selected_sequence_id(USER_SEQUENCE_ID)
            .with_custom_sequence(Some(letters.to_string()));
        Ok(self.session.use_letters(letters))
    }

    /// Applies a choice to the session.
    #[instrument(skip(self))]
    pub fn apply_choice(&mut self, choice: Choice) -> Result<Snapshot, SessionError> {
        self.session.apply_choice(choice)
    }

    /// Resets the session to step 0.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Snapshot {
        self.session.reset()
    }

    /// Mutable access for callers that drive the session directly, such as
    /// a two-spectator round.
    pub fn session_mut(&mut self) -> &mut FilterSession {
        &mut self.session
    }

    /// Applies a partial preference update.
    ///
    /// ```
    /// # use binary_words::{App, Catalog, Preferences};
    /// let mut app = App::new(Catalog::builtin(), Preferences::default());
    /// app.update_preferences(|p| p.with_enable_psychological_profiling(true));
    /// assert!(*app.preferences().enable_psychological_profiling());
    /// ```
    #[instrument(skip(self, update))]
    pub fn update_preferences(&mut self, update: impl FnOnce(Preferences) -> Preferences) {
        self.preferences = update(self.preferences.clone());
    }

    /// Flips perform mode and returns the new value.
    #[instrument(skip(self))]
    pub fn toggle_perform_mode(&mut self) -> bool {
        self.perform_mode = !self.perform_mode;
        info!(perform_mode = self.perform_mode, "Perform mode toggled");
        self.perform_mode
    }

    /// Sets perform mode.
    #[instrument(skip(self))]
    pub fn set_perform_mode(&mut self, enabled: bool) {
        self.perform_mode = enabled;
    }

    /// Exports the session using the stored export settings.
    #[instrument(skip(self, dir), fields(dir = %dir.as_ref().display()))]
    pub fn export(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        export_session(&self.session, self.preferences.export_settings(), dir)
    }
}
