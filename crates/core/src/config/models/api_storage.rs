use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const SESSION_FILE: &str = "session.json";
const PREFERENCES_FILE: &str = "preferences.json";

fn default_request_timeout_seconds() -> u64 {
    30
}

/// Remote service-manager API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.base_url.is_empty() {
            return Err(anyhow::anyhow!("API地址不能为空"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(anyhow::anyhow!(
                "API地址必须以http://或https://开头: {}",
                self.base_url
            ));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("请求超时时间必须大于0"));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for `format!("{base}{path}")`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// Where the session token and the language preference are persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub directory: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: default_storage_directory(),
        }
    }
}

pub fn default_storage_directory() -> String {
    dirs::config_dir()
        .map(|dir| dir.join("easytv"))
        .unwrap_or_else(|| PathBuf::from(".easytv"))
        .to_string_lossy()
        .to_string()
}

impl StorageConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.directory.trim().is_empty() {
            return Err(anyhow::anyhow!("存储目录不能为空"));
        }
        Ok(())
    }

    pub fn session_file(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(SESSION_FILE)
    }

    pub fn preferences_file(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(PREFERENCES_FILE)
    }
}
