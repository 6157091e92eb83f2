pub mod api_storage;
pub mod app_config;
pub mod observability;

// Re-export main types for easier imports
pub use api_storage::{ApiConfig, StorageConfig};
pub use app_config::AppConfig;
pub use observability::ObservabilityConfig;
