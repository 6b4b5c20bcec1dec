use config::{Config, Environment, File};
use foh_domain::config::AppConfig;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// Prefix for environment overrides, e.g. `FOH__TIMING__CAROUSEL_INTERVAL_MS`.
pub const ENV_PREFIX: &str = "FOH";

#[foh_derive::foh_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `FOH__*` environment variables.
///
/// The file format follows its extension (`site.toml`, `site.json`, ...). Nested keys use
/// double underscores in the environment: `FOH__STORAGE__DATA_DIR` maps to `storage.data_dir`.
///
/// # Errors
/// Returns an error if the file is missing or the merged values do not fit `T`.
///
/// # Example
/// ```rust,no_run
/// use foh_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Window {
///     width: f64,
/// }
///
/// let window: Window = load_config("config/site.toml").unwrap_or_default();
/// ```
pub fn load_config<T>(path: impl AsRef<Path>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_layered(Some(path.as_ref()), env_source())
}

/// Application config: the given file (if any) plus environment overrides on top of defaults.
///
/// # Errors
/// Returns an error if a given file is missing or any value has the wrong shape.
pub fn load_app_config(path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    load_layered(path.as_ref().map(|p| p.as_ref()), env_source())
}

fn load_layered<T>(file: Option<&Path>, env: Environment) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let mut builder = Config::builder();
    if let Some(file) = file {
        info!("Loading config from {}", file.display());
        builder = builder.add_source(File::from(file).required(true));
    }

    builder
        .add_source(env)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__").try_parsing(true)
}
