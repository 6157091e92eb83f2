use thiserror::Error;

/// Errors raised by the console's own plumbing (storage, configuration, I/O).
///
/// Failures reported by the remote API are not represented here; they travel
/// as `ServiceError` values through the domain services.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("配置错误: {0}")]
    Configuration(String),

    #[error("会话存储错误: {0}")]
    SessionStorage(String),

    #[error("序列化错误: {0}")]
    Serialization(String),

    #[error("网络错误: {0}")]
    Network(String),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl ConsoleError {
    pub fn storage<S: Into<String>>(msg: S) -> Self {
        Self::SessionStorage(msg.into())
    }
    pub fn config_error<S: Into<String>>(msg: S) -> Self {
        Self::Configuration(msg.into())
    }
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ConsoleError::Configuration(_) | ConsoleError::Internal(_)
        )
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        ConsoleError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_error_display() {
        let error = ConsoleError::storage("disk full");
        assert_eq!(format!("{error}"), "会话存储错误: disk full");
    }

    #[test]
    fn test_console_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error: ConsoleError = io.into();
        assert!(matches!(error, ConsoleError::Io(_)));
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_console_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ConsoleError = json_error.into();
        assert!(matches!(error, ConsoleError::Serialization(_)));
    }

    #[test]
    fn test_fatal_errors() {
        assert!(ConsoleError::config_error("bad").is_fatal());
        assert!(ConsoleError::Internal("boom".to_string()).is_fatal());
        assert!(!ConsoleError::Network("refused".to_string()).is_fatal());
    }
}
