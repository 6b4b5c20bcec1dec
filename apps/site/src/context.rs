use foh_kernel::prelude::*;
use foh_kernel::seo::Metadata;
use std::sync::Arc;
use tracing::warn;

/// Shared services for the component tree, provided once at launch.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub themes: Arc<dyn ThemeStore>,
    pub contact: ContactFlow<SimulatedSubmitter>,
    pub metadata: Arc<Metadata>,
}

impl AppContext {
    #[must_use]
    pub fn new(config: AppConfig, themes: Arc<dyn ThemeStore>) -> Self {
        let contact = ContactFlow::simulated(&config.timing);
        let metadata = Arc::new(Metadata::from_site(&config.site));
        Self { config, themes, contact, metadata }
    }

    /// Theme store rooted at `storage.data_dir`.
    #[must_use]
    pub fn with_file_store(config: AppConfig) -> Self {
        let themes = Arc::new(FileThemeStore::new(&config.storage.data_dir));
        Self::new(config, themes)
    }

    /// Fresh UI state seeded with the persisted theme.
    #[must_use]
    pub fn initial_state(&self) -> UiState {
        let snapshot = UiSnapshot { theme: load_theme(self.themes.as_ref()) };
        UiState::restore(snapshot, self.config.site.feature_count())
    }

    /// Writes the preference; a failed write is logged and the session keeps the new theme.
    pub fn persist_theme(&self, theme: Theme) {
        if let Err(err) = self.themes.save(theme) {
            warn!(error = %err, %theme, "Failed to save theme preference");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_restores_theme_only() {
        let store = Arc::new(MemoryThemeStore::with_raw(r#"{"state":{"theme":"light"},"version":0}"#));
        let ctx = AppContext::new(AppConfig::default(), store);

        let state = ctx.initial_state();
        assert_eq!(state.theme(), Theme::Light);
        assert_eq!(state.current_feature_index(), 0);
        assert!(!state.is_contact_form_open());
        assert_eq!(state.feature_count(), 9);
    }

    #[test]
    fn persist_theme_writes_record() {
        let store = Arc::new(MemoryThemeStore::new());
        let ctx = AppContext::new(AppConfig::default(), store.clone());

        ctx.persist_theme(Theme::Dark);
        assert_eq!(store.raw().as_deref(), Some(r#"{"state":{"theme":"dark"},"version":0}"#));
    }

    #[test]
    fn file_store_lives_in_data_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut config = AppConfig::default();
        config.storage.data_dir = dir.path().to_path_buf();

        let ctx = AppContext::with_file_store(config);
        ctx.persist_theme(Theme::Light);

        assert!(dir.path().join("foh-pro-ui-store.json").exists());
        assert_eq!(ctx.initial_state().theme(), Theme::Light);
    }
}
