//! Theme persistence.
//!
//! The site keeps exactly one record: the theme preference, stored as
//! `{"state":{"theme":"dark"},"version":0}` under [`PERSISTENCE_KEY`].
//! It is read once at startup and written on every change.

use crate::store::UiSnapshot;
use foh_domain::constants::PERSISTENCE_KEY;
use foh_domain::theme::Theme;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::Debug;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const RECORD_VERSION: u32 = 0;

#[foh_derive::foh_error]
pub enum PersistenceError {
    #[error("Theme store IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Theme record is malformed{}: {source}", format_context(.context))]
    Serde { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal theme store error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// On-disk shape of the persisted UI slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Record {
    state: UiSnapshot,
    #[serde(default)]
    version: u32,
}

/// Load/save boundary for the theme preference.
pub trait ThemeStore: Send + Sync + Debug {
    /// `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    /// Returns an error when the record exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Theme>, PersistenceError>;

    /// # Errors
    /// Returns an error when the record cannot be written.
    fn save(&self, theme: Theme) -> Result<(), PersistenceError>;
}

/// Startup read: any failure is logged and treated as "nothing saved".
pub fn load_theme(store: &dyn ThemeStore) -> Theme {
    match store.load() {
        Ok(Some(theme)) => {
            debug!(%theme, "Restored theme preference");
            theme
        },
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!(error = %err, "Ignoring unreadable theme preference");
            Theme::default()
        },
    }
}

/// Theme record kept as a JSON file inside the data directory.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self { path: data_dir.as_ref().join(format!("{PERSISTENCE_KEY}.json")) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension(format!("json.{}.tmp", std::process::id()))
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, PersistenceError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Io {
                    source,
                    context: Some(format!("Reading {}", self.path.display()).into()),
                });
            },
        };

        let record: Record = serde_json::from_slice(&raw).context("Decoding theme record")?;
        Ok(Some(record.state.theme))
    }

    fn save(&self, theme: Theme) -> Result<(), PersistenceError> {
        let dir = self.path.parent().ok_or("Theme record path has no parent directory")?;
        fs::create_dir_all(dir).context(format!("Creating {}", dir.display()))?;

        let record = Record { state: UiSnapshot { theme }, version: RECORD_VERSION };
        let bytes = serde_json::to_vec(&record).context("Encoding theme record")?;

        // Temp file + rename: readers see the old record or the new one, never a mix.
        let tmp = self.tmp_path();
        let mut file = fs::File::create(&tmp).context("Creating temp record")?;
        file.write_all(&bytes).context("Writing temp record")?;
        file.sync_all().context("Syncing temp record")?;
        drop(file);
        fs::rename(&tmp, &self.path).context("Replacing theme record")?;

        debug!(%theme, path = %self.path.display(), "Saved theme preference");
        Ok(())
    }
}

/// Process-local store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    record: RwLock<Option<String>>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the raw stored text, e.g. to simulate a corrupted record.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self { record: RwLock::new(Some(raw.into())) }
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.record.read().clone()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, PersistenceError> {
        let guard = self.record.read();
        let Some(raw) = guard.as_deref() else {
            return Ok(None);
        };
        let record: Record = serde_json::from_str(raw).context("Decoding theme record")?;
        Ok(Some(record.state.theme))
    }

    fn save(&self, theme: Theme) -> Result<(), PersistenceError> {
        let record = Record { state: UiSnapshot { theme }, version: RECORD_VERSION };
        let raw = serde_json::to_string(&record).context("Encoding theme record")?;
        *self.record.write() = Some(raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip_uses_record_shape() -> Result<(), PersistenceError> {
        let store = MemoryThemeStore::new();
        assert_eq!(store.load()?, None);

        store.save(Theme::Dark)?;
        assert_eq!(store.raw().as_deref(), Some(r#"{"state":{"theme":"dark"},"version":0}"#));
        assert_eq!(store.load()?, Some(Theme::Dark));
        Ok(())
    }

    #[test]
    fn corrupted_record_falls_back_to_system() {
        let store = MemoryThemeStore::with_raw("{not json");
        assert!(matches!(store.load(), Err(PersistenceError::Serde { .. })));
        assert_eq!(load_theme(&store), Theme::System);
    }

    #[test]
    fn record_without_theme_defaults_to_system() -> Result<(), PersistenceError> {
        let store = MemoryThemeStore::with_raw(r#"{"state":{}}"#);
        assert_eq!(store.load()?, Some(Theme::System));
        Ok(())
    }
}
