use std::io::Write;

use crate::config::models::AppConfig;

#[test]
fn test_default_config_is_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.api.request_timeout_seconds, 30);
    assert_eq!(config.observability.log_format, "pretty");
}

#[test]
fn test_from_toml() {
    let toml_str = r#"
        [api]
        base_url = "https://sm.easytv.example"
        request_timeout_seconds = 5

        [storage]
        directory = "/tmp/easytv-test"

        [observability]
        log_level = "debug"
        log_format = "json"
    "#;

    let config = AppConfig::from_toml(toml_str).unwrap();
    assert_eq!(config.api.base_url, "https://sm.easytv.example");
    assert_eq!(config.api.request_timeout_seconds, 5);
    assert_eq!(
        config.storage.session_file(),
        std::path::PathBuf::from("/tmp/easytv-test/session.json")
    );
    assert_eq!(config.observability.log_level, "debug");
}

#[test]
fn test_from_toml_rejects_invalid_values() {
    let toml_str = r#"
        [api]
        base_url = "ftp://sm.easytv.example"

        [storage]
        directory = "/tmp/easytv-test"

        [observability]
        log_level = "info"
        log_format = "pretty"
    "#;

    assert!(AppConfig::from_toml(toml_str).is_err());
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let mut config = AppConfig::default();
    config.api.base_url = "http://10.0.0.5:9000".to_string();

    let serialized = config.to_toml().unwrap();
    let parsed = AppConfig::from_toml(&serialized).unwrap();
    assert_eq!(parsed.api.base_url, "http://10.0.0.5:9000");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
        [api]
        base_url = "http://files.example:8080/"
        "#
    )
    .unwrap();

    let config = AppConfig::load(Some(file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.api.base_url, "http://files.example:8080/");
    assert_eq!(config.api.normalized_base_url(), "http://files.example:8080");
    // untouched sections fall back to defaults
    assert_eq!(config.observability.log_level, "warn");
}

#[test]
fn test_load_missing_file_fails() {
    assert!(AppConfig::load(Some("/definitely/not/here/easytv.toml")).is_err());
}
