use foh_domain::config::LogConfig;
use foh_logger::Logger;
use serde_json::Value;
use std::fs;

#[test]
fn debug_config_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    let config =
        LogConfig { level: "debug".to_owned(), path: Some(tmp.path().join("logs")), json: true };

    let logger = Logger::builder()
        .name("foh-site")
        .console(false)
        .level_name(&config.level)?
        .init_with_dir(config.path.as_deref(), config.json)?;

    tracing::debug!(index = 4, "Feature index changed");
    tracing::trace!("Carousel tick");
    drop(logger);

    let dir = config.path.as_deref().expect("path is set");
    let mut records = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("log") {
            continue;
        }
        for line in fs::read_to_string(&path)?.lines() {
            records.push(serde_json::from_str::<Value>(line)?);
        }
    }

    let changed = records
        .iter()
        .find(|record| record["fields"]["message"] == "Feature index changed")
        .expect("debug event reaches the file");
    assert_eq!(changed["level"], "DEBUG");
    assert_eq!(changed["fields"]["index"], 4);
    assert!(records.iter().all(|record| record["level"] != "TRACE"), "trace is below the configured level");
    Ok(())
}
