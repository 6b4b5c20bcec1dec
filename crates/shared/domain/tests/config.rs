use foh_domain::config::{AppConfig, LogConfig, StorageConfig, TimingConfig};
use serde_json::json;
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    let timing = TimingConfig::default();
    assert_eq!(timing.carousel_interval(), Duration::from_secs(5));
    assert_eq!(timing.submit_delay(), Duration::from_millis(1500));
    assert_eq!(timing.close_delay(), Duration::from_secs(2));

    let storage = StorageConfig::default();
    assert_eq!(storage.data_dir, std::path::PathBuf::from(".foh"));

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.path.is_none());

    let cfg = AppConfig::default();
    assert_eq!(cfg.site.feature_count(), 9);
}

#[test]
fn app_config_deserializes_partial_sections() {
    let raw = json!({
        "site": { "company": { "name": "Acme Stages" } },
        "timing": { "carousel_interval_ms": 250 },
        "storage": { "data_dir": "/tmp/foh" }
    });

    let cfg: AppConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.site.company.name, "Acme Stages");
    assert_eq!(cfg.site.company.domain, "foh-pro.com");
    assert_eq!(cfg.site.feature_count(), 9);
    assert_eq!(cfg.timing.carousel_interval_ms, 250);
    assert_eq!(cfg.timing.close_delay_ms, 2000);
    assert_eq!(cfg.storage.data_dir, std::path::PathBuf::from("/tmp/foh"));
}

#[test]
fn clones_share_until_mutated() {
    let a = AppConfig::default();
    let mut b = a.clone();
    assert_eq!(a, b);

    b.timing.carousel_interval_ms = 10;
    assert_ne!(a, b);
    assert_eq!(a.timing.carousel_interval_ms, 5000);
}
