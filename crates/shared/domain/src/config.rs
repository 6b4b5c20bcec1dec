use crate::constants::{CAROUSEL_INTERVAL_MS, CLOSE_DELAY_MS, SUBMIT_DELAY_MS};
use crate::site::SiteConfig;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Top-level application configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub site: SiteConfig,
    pub storage: StorageConfig,
    pub log: LogConfig,
    pub timing: TimingConfig,
    pub window: WindowConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

impl PartialEq for AppConfig {
    /// Configs are immutable once shared, so pointer identity is enough.
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Where local state lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Directory for rolling log files; console only when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
}

/// Timer settings, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub carousel_interval_ms: u64,
    pub submit_delay_ms: u64,
    pub close_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl TimingConfig {
    #[must_use]
    pub const fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    #[must_use]
    pub const fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    #[must_use]
    pub const fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }
}

// --- Default ---

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: PathBuf::from(".foh") }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: CAROUSEL_INTERVAL_MS,
            submit_delay_ms: SUBMIT_DELAY_MS,
            close_delay_ms: CLOSE_DELAY_MS,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self { width: 1200.0, height: 800.0 }
    }
}
