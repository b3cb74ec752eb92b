//! Settings persistence boundary and its implementations.
//!
//! # Responsibility
//! - Load the settings record, merging the persisted document over
//!   defaults.
//! - Rewrite the whole record on save.
//!
//! # Invariants
//! - A missing document loads as pure defaults; that is first-run state,
//!   not an error.
//! - Saves are whole-record. There is no partial update path.
//! - `save` takes `&mut self`, so concurrent writers are ruled out by the
//!   borrow checker rather than by locking.

use crate::settings::model::PlannerSettings;
use log::info;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub type SettingsStoreResult<T> = Result<T, SettingsStoreError>;

/// Failure while loading or saving the settings document.
#[derive(Debug)]
pub enum SettingsStoreError {
    Io(io::Error),
    Document(serde_json::Error),
}

impl Display for SettingsStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "settings store I/O failure: {err}"),
            Self::Document(err) => write!(f, "settings document is malformed: {err}"),
        }
    }
}

impl Error for SettingsStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Document(err) => Some(err),
        }
    }
}

impl From<io::Error> for SettingsStoreError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SettingsStoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Document(err)
    }
}

/// Persistence boundary for the settings record.
pub trait SettingsStore {
    /// Loads the record, merging persisted values over defaults.
    fn load(&self) -> SettingsStoreResult<PlannerSettings>;

    /// Persists the whole record, replacing the previous document.
    fn save(&mut self, settings: &PlannerSettings) -> SettingsStoreResult<()>;
}

/// JSON-document store at a fixed path, typically
/// `<vault>/.noteplanner/settings.json`.
pub struct JsonSettingsStore {
    path: PathBuf,
}

impl JsonSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonSettingsStore {
    fn load(&self) -> SettingsStoreResult<PlannerSettings> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=settings_load module=settings status=defaults path={}",
                    self.path.display()
                );
                return Ok(PlannerSettings::default());
            }
            Err(err) => return Err(SettingsStoreError::Io(err)),
        };
        let settings = serde_json::from_str(&raw)?;
        info!(
            "event=settings_load module=settings status=ok path={}",
            self.path.display()
        );
        Ok(settings)
    }

    fn save(&mut self, settings: &PlannerSettings) -> SettingsStoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        info!(
            "event=settings_save module=settings status=ok path={}",
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory store for tests and ephemeral hosts.
///
/// Clones share one buffer, so a test can keep a handle while the plugin
/// owns another and observe every save. Not thread-safe, like the rest of
/// the planner.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    persisted: Rc<RefCell<Option<PlannerSettings>>>,
    saves: Rc<RefCell<u32>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out with a persisted record.
    pub fn with_persisted(settings: PlannerSettings) -> Self {
        let store = Self::new();
        *store.persisted.borrow_mut() = Some(settings);
        store
    }

    /// Currently persisted record, if any save or seed happened.
    pub fn persisted(&self) -> Option<PlannerSettings> {
        self.persisted.borrow().clone()
    }

    /// Number of saves that went through this buffer.
    pub fn save_count(&self) -> u32 {
        *self.saves.borrow()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> SettingsStoreResult<PlannerSettings> {
        Ok(self.persisted.borrow().clone().unwrap_or_default())
    }

    fn save(&mut self, settings: &PlannerSettings) -> SettingsStoreResult<()> {
        *self.persisted.borrow_mut() = Some(settings.clone());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonSettingsStore, MemorySettingsStore, SettingsStore};
    use crate::settings::model::PlannerSettings;
    use tempfile::tempdir;

    #[test]
    fn missing_document_loads_defaults() {
        let dir = tempdir().expect("tempdir");
        let store = JsonSettingsStore::new(dir.path().join("settings.json"));
        let settings = store.load().expect("load");
        assert_eq!(settings, PlannerSettings::default());
    }

    #[test]
    fn save_then_load_round_trips_and_creates_parent() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(".noteplanner/settings.json");
        let mut store = JsonSettingsStore::new(path.clone());

        let mut settings = PlannerSettings::default();
        settings.daily_note_location = "Daily".to_string();
        settings.emojis = vec!["🔥".to_string()];
        store.save(&settings).expect("save");

        assert!(path.is_file());
        assert_eq!(store.load().expect("load"), settings);
    }

    #[test]
    fn partial_document_on_disk_merges_over_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"weeklyNoteLocation":"Weekly"}"#).expect("seed");

        let store = JsonSettingsStore::new(path);
        let settings = store.load().expect("load");
        assert_eq!(settings.weekly_note_location, "Weekly");
        assert_eq!(settings.daily_note_format, "YYYY-MM-DD");
        assert_eq!(settings.week_start, "Monday");
    }

    #[test]
    fn malformed_document_is_an_error_not_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").expect("seed");

        let store = JsonSettingsStore::new(path);
        assert!(store.load().is_err());
    }

    #[test]
    fn memory_store_clones_share_one_buffer() {
        let observer = MemorySettingsStore::new();
        let mut writer = observer.clone();

        let mut settings = PlannerSettings::default();
        settings.daily_note_format = "DD.MM.YYYY".to_string();
        writer.save(&settings).expect("save");

        assert_eq!(observer.save_count(), 1);
        assert_eq!(observer.persisted().expect("persisted"), settings);
        assert_eq!(observer.load().expect("load"), settings);
    }
}
