#![windows_subsystem = "windows"]

use foh_kernel::config::load_app_config;
use foh_logger::Logger;
use foh_site::{AppContext, SiteApp};

/// Optional path to a config file; `FOH__*` variables apply either way.
const CONFIG_PATH_VAR: &str = "FOH_CONFIG";

fn main() -> anyhow::Result<()> {
    let config = load_app_config(std::env::var_os(CONFIG_PATH_VAR))?;

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .level_name(&config.log.level)?
        .init_with_dir(config.log.path.as_deref(), config.log.json)?;

    tracing::info!(data_dir = %config.storage.data_dir.display(), "Starting site");
    SiteApp::new(AppContext::with_file_store(config)).launch();

    Ok(())
}
