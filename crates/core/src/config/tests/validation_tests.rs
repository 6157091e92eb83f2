use crate::config::models::{ApiConfig, ObservabilityConfig, StorageConfig};

#[test]
fn test_api_validation() {
    let mut config = ApiConfig::default();
    assert!(config.validate().is_ok());

    config.base_url = "".to_string();
    assert!(config.validate().is_err());

    config.base_url = "localhost:8080".to_string();
    assert!(config.validate().is_err());

    config.base_url = "https://localhost:8080".to_string();
    assert!(config.validate().is_ok());

    config.request_timeout_seconds = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_storage_validation() {
    let mut config = StorageConfig {
        directory: "/var/lib/easytv".to_string(),
    };
    assert!(config.validate().is_ok());
    assert_eq!(
        config.preferences_file(),
        std::path::PathBuf::from("/var/lib/easytv/preferences.json")
    );

    config.directory = "   ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_observability_validation() {
    let mut config = ObservabilityConfig::default();
    assert!(config.validate().is_ok());

    config.log_level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log_level = "INFO".to_string();
    assert!(config.validate().is_ok());

    config.log_format = "xml".to_string();
    assert!(config.validate().is_err());
}
