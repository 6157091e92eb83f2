use easytv_core::ConsoleResult;

use crate::entities::{Language, StoredCredentials};

/// 会话存储抽象
///
/// Credentials and the language preference are kept apart: `clear` drops
/// the credentials only.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> ConsoleResult<Option<StoredCredentials>>;
    fn save(&self, credentials: &StoredCredentials) -> ConsoleResult<()>;
    fn clear(&self) -> ConsoleResult<()>;
    fn language(&self) -> ConsoleResult<Option<Language>>;
    fn set_language(&self, language: Language) -> ConsoleResult<()>;
}
