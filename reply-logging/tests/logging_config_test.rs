use reply_config::{ConfigLoader, LogFormat, LogLevel, LoggingConfig};
use reply_logging::{fmt_layer, init_logging_from_config};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_logging_config_integration() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
logging:
  level: debug
  format: json
  include_location: true
"#
    )
    .unwrap();

    let config = ConfigLoader::new().from_file(file.path()).unwrap();

    // Verify config was parsed correctly
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.logging.format, LogFormat::Json);
    assert!(config.logging.include_location);

    assert!(init_logging_from_config(&config.logging).is_ok());
    tracing::info!(component = "logging_config_test", "Subscriber installed");
}

#[test]
fn test_minimal_logging_config() {
    let config = LoggingConfig::default();

    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Text);
    assert!(!config.include_location);

    let _layer = fmt_layer(&config);
}
