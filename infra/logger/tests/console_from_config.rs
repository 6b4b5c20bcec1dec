use foh_domain::config::LogConfig;
use foh_logger::{Logger, LoggerError};

#[test]
fn default_config_installs_console_only_once() {
    let config = LogConfig::default();
    let logger = Logger::builder()
        .name("foh-site")
        .console(true)
        .level_name(&config.level)
        .and_then(|builder| builder.init_with_dir(config.path.as_deref(), config.json))
        .expect("default log config installs");

    assert!(logger.guard().is_none(), "no directory configured, so no file writer");

    let err = Logger::builder().name("foh-site").init().expect_err("subscriber is global");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
