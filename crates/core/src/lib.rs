pub mod config;
pub mod errors;
pub mod logging;

pub use config::models::{ApiConfig, AppConfig, ObservabilityConfig, StorageConfig};
pub use errors::*;
pub use logging::{init_logging, LogFormat};

/// 统一的Result类型
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;
