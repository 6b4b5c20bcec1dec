use foh_domain::config::AppConfig;
use foh_kernel::config::{load_app_config, load_config};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

const SITE_TOML: &str = r#"
[site.company]
name = "Acme Stages"
domain = "acme.example"

[timing]
carousel_interval_ms = 3000

[storage]
data_dir = "/var/lib/foh"
"#;

#[test]
#[serial]
fn loads_toml_over_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("site.toml");
    fs::write(&path, SITE_TOML)?;

    let cfg: AppConfig = load_config(&path)?;
    assert_eq!(cfg.site.company.name, "Acme Stages");
    assert_eq!(cfg.site.site_url(), "https://acme.example");
    assert_eq!(cfg.site.feature_count(), 9);
    assert_eq!(cfg.timing.carousel_interval_ms, 3000);
    assert_eq!(cfg.timing.submit_delay_ms, 1500);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/var/lib/foh"));
    Ok(())
}

#[test]
#[serial]
fn missing_file_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let result: Result<AppConfig, _> = load_config(dir.path().join("absent.toml"));
    assert!(result.is_err());
}

#[test]
#[serial]
fn no_file_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = load_app_config(None::<&str>)?;
    assert_eq!(cfg.timing.carousel_interval_ms, 5000);
    assert_eq!(cfg.site.company.name, "Front of House Productions");
    Ok(())
}

#[test]
#[serial]
fn shipped_config_matches_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../config/site.toml");
    let cfg = load_app_config(Some(path))?;
    let defaults = AppConfig::default();

    assert_eq!(cfg.timing, defaults.timing);
    assert_eq!(cfg.site, defaults.site);
    assert_eq!(cfg.log.level, defaults.log.level);
    Ok(())
}
