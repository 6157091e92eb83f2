use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use easytv_core::{ConsoleError, ConsoleResult, StorageConfig};
use easytv_domain::entities::{Language, StoredCredentials};
use easytv_domain::ports::SessionStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    lang: Option<Language>,
}

/// 文件会话存储
///
/// `session.json` 保存令牌和管理员标记，`preferences.json` 保存语言偏好。
/// 清除会话只删除前者。
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    session_path: PathBuf,
    preferences_path: PathBuf,
}

impl FileSessionStore {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            session_path: config.session_file(),
            preferences_path: config.preferences_file(),
        }
    }

    pub fn session_path(&self) -> &Path {
        &self.session_path
    }

    fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> ConsoleResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                // 损坏的文件视为不存在，下次写入时覆盖
                warn!("忽略无法解析的文件 {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize>(path: &Path, value: &T) -> ConsoleResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConsoleError::storage(format!("无法创建目录 {}: {}", parent.display(), e))
            })?;
        }
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content)
            .map_err(|e| ConsoleError::storage(format!("无法写入 {}: {}", path.display(), e)))
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> ConsoleResult<Option<StoredCredentials>> {
        Self::read_json(&self.session_path)
    }

    fn save(&self, credentials: &StoredCredentials) -> ConsoleResult<()> {
        debug!("保存会话到 {}", self.session_path.display());
        Self::write_json(&self.session_path, credentials)
    }

    fn clear(&self) -> ConsoleResult<()> {
        match fs::remove_file(&self.session_path) {
            Ok(()) => {
                debug!("已清除会话 {}", self.session_path.display());
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ConsoleError::storage(format!(
                "无法删除 {}: {}",
                self.session_path.display(),
                e
            ))),
        }
    }

    fn language(&self) -> ConsoleResult<Option<Language>> {
        let preferences: Option<Preferences> = Self::read_json(&self.preferences_path)?;
        Ok(preferences.and_then(|p| p.lang))
    }

    fn set_language(&self, language: Language) -> ConsoleResult<()> {
        let mut preferences: Preferences =
            Self::read_json(&self.preferences_path)?.unwrap_or_default();
        preferences.lang = Some(language);
        Self::write_json(&self.preferences_path, &preferences)
    }
}

/// 内存会话存储，用于测试和一次性运行
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    credentials: RwLock<Option<StoredCredentials>>,
    language: RwLock<Option<Language>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: StoredCredentials) -> Self {
        Self {
            credentials: RwLock::new(Some(credentials)),
            language: RwLock::new(None),
        }
    }
}

fn poisoned<T>(_: T) -> ConsoleError {
    ConsoleError::Internal("会话存储锁已损坏".to_string())
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> ConsoleResult<Option<StoredCredentials>> {
        Ok(self.credentials.read().map_err(poisoned)?.clone())
    }

    fn save(&self, credentials: &StoredCredentials) -> ConsoleResult<()> {
        *self.credentials.write().map_err(poisoned)? = Some(credentials.clone());
        Ok(())
    }

    fn clear(&self) -> ConsoleResult<()> {
        *self.credentials.write().map_err(poisoned)? = None;
        Ok(())
    }

    fn language(&self) -> ConsoleResult<Option<Language>> {
        Ok(*self.language.read().map_err(poisoned)?)
    }

    fn set_language(&self, language: Language) -> ConsoleResult<()> {
        *self.language.write().map_err(poisoned)? = Some(language);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileSessionStore {
        FileSessionStore::new(&StorageConfig {
            directory: dir.path().join("nested").to_string_lossy().to_string(),
        })
    }

    fn credentials() -> StoredCredentials {
        StoredCredentials {
            token: "tok-1".to_string(),
            is_admin: false,
        }
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), None);

        store.save(&credentials()).unwrap();
        assert_eq!(store.load().unwrap(), Some(credentials()));
    }

    #[test]
    fn test_clear_keeps_language() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&credentials()).unwrap();
        store.set_language(Language::El).unwrap();

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.language().unwrap(), Some(Language::El));
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_session_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&credentials()).unwrap();
        fs::write(store.session_path(), "{not json").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_in_memory_store() {
        let store = InMemorySessionStore::with_credentials(credentials());
        store.set_language(Language::El).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.language().unwrap(), Some(Language::El));
    }
}
