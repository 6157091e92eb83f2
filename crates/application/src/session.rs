use std::sync::{Arc, PoisonError, RwLock};

use easytv_core::ConsoleResult;
use easytv_domain::entities::{Language, Session, StoredCredentials};
use easytv_domain::ports::SessionStore;
use tracing::{debug, info};

#[derive(Debug)]
struct SessionState {
    session: Option<Session>,
    language: Language,
}

/// 会话上下文
///
/// Handed explicitly to every service and controller. Mirrors the store:
/// every change is written through before the in-memory copy is updated.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
    state: Arc<RwLock<SessionState>>,
}

impl SessionContext {
    /// Rebuild the context from whatever the store holds.
    pub fn restore(store: Arc<dyn SessionStore>) -> ConsoleResult<Self> {
        let language = store.language()?.unwrap_or_default();
        let session = store
            .load()?
            .map(|credentials| Session::from_credentials(credentials, language));
        debug!("会话恢复: 已登录={}", session.is_some());

        Ok(Self {
            store,
            state: Arc::new(RwLock::new(SessionState { session, language })),
        })
    }

    pub fn current(&self) -> Option<Session> {
        self.read(|state| state.session.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.read(|state| state.session.as_ref().map(|s| s.token.clone()))
    }

    pub fn credentials(&self) -> Option<StoredCredentials> {
        self.read(|state| state.session.as_ref().map(Session::credentials))
    }

    pub fn is_authenticated(&self) -> bool {
        self.read(|state| state.session.is_some())
    }

    pub fn is_admin(&self) -> bool {
        self.read(|state| state.session.as_ref().is_some_and(|s| s.is_admin))
    }

    pub fn language(&self) -> Language {
        self.read(|state| state.language)
    }

    pub fn establish(&self, token: impl Into<String>, is_admin: bool) -> ConsoleResult<Session> {
        let session = Session::new(token, is_admin, self.language());
        self.store.save(&session.credentials())?;
        self.write(|state| state.session = Some(session.clone()));
        info!("会话已建立 (管理员: {})", is_admin);
        Ok(session)
    }

    /// Drop token and role. The language preference stays.
    pub fn terminate(&self) -> ConsoleResult<()> {
        self.write(|state| state.session = None);
        self.store.clear()?;
        info!("会话已结束");
        Ok(())
    }

    pub fn set_language(&self, language: Language) -> ConsoleResult<()> {
        self.store.set_language(language)?;
        self.write(|state| {
            state.language = language;
            if let Some(session) = state.session.as_mut() {
                session.language = language;
            }
        });
        Ok(())
    }

    fn read<T>(&self, f: impl FnOnce(&SessionState) -> T) -> T {
        let guard = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut SessionState)) {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .field("language", &self.language())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easytv_testing_utils::{empty_store, user_store, TEST_TOKEN};

    #[test]
    fn test_restore_from_store() {
        let store = user_store();
        store.set_language(Language::El).unwrap();

        let context = SessionContext::restore(store).unwrap();
        assert_eq!(context.token().as_deref(), Some(TEST_TOKEN));
        assert!(!context.is_admin());
        assert_eq!(context.current().unwrap().language, Language::El);
    }

    #[test]
    fn test_establish_and_terminate() {
        let store = empty_store();
        let context = SessionContext::restore(store.clone()).unwrap();
        assert!(!context.is_authenticated());

        context.establish("abc", true).unwrap();
        assert!(context.is_admin());
        assert_eq!(store.load().unwrap().unwrap().token, "abc");

        context.set_language(Language::El).unwrap();
        context.terminate().unwrap();
        assert!(context.token().is_none());
        assert!(store.load().unwrap().is_none());
        assert_eq!(context.language(), Language::El);
    }

    #[test]
    fn test_clones_share_state() {
        let context = SessionContext::restore(empty_store()).unwrap();
        let other = context.clone();
        context.establish("abc", false).unwrap();
        assert_eq!(other.token().as_deref(), Some("abc"));
    }
}
