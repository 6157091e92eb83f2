use easytv_application::SessionContext;
use easytv_domain::api::ServiceError;
use easytv_domain::codes::ErrorCode;
use easytv_domain::dialog::Template;
use easytv_domain::i18n;
use easytv_domain::routes::Route;
use tracing::{info, warn};

use crate::modal::{error_modal, ModalDispatcher};
use crate::navigator::Navigator;

/// 错误处理器
///
/// Turns a failed call into a popup. Codes that invalidate the session
/// also log the user out and send them to the login page.
#[derive(Clone)]
pub struct ErrorHandler {
    dispatcher: ModalDispatcher,
    session: SessionContext,
    navigator: Navigator,
}

impl ErrorHandler {
    pub fn new(dispatcher: ModalDispatcher, session: SessionContext, navigator: Navigator) -> Self {
        Self {
            dispatcher,
            session,
            navigator,
        }
    }

    /// Show the error; returns its code.
    pub async fn handle(&self, error: &ServiceError) -> ErrorCode {
        let code = error.code();
        let language = self.session.language();
        let mut data = error_modal(&code);
        // server text only helps when there is no catalog message for the code
        if let Some(description) = error.description() {
            if data
                .message
                .as_deref()
                .is_some_and(|key| i18n::lookup(language, key).is_none())
            {
                data = data.with_param(description);
            }
        }
        self.dispatcher.open_popup(Template::Popup, &data, None).await;

        if code.invalidates_session() {
            self.force_logout();
        }
        code
    }

    pub async fn handle_code(&self, code: &ErrorCode) {
        self.dispatcher.popup_error(code).await;
        if code.invalidates_session() {
            self.force_logout();
        }
    }

    /// Several failures at once. Any session-invalidating code wins: only it
    /// is shown and the user is logged out. Returns whether that happened.
    pub async fn handle_batch(&self, codes: &[ErrorCode]) -> bool {
        if let Some(code) = codes.iter().find(|c| c.invalidates_session()) {
            self.handle_code(code).await;
            return true;
        }
        for code in codes {
            self.dispatcher.popup_error(code).await;
        }
        false
    }

    pub fn force_logout(&self) {
        info!("会话失效，返回登录页");
        if let Err(e) = self.session.terminate() {
            warn!("清除本地会话失败: {}", e);
        }
        self.navigator.navigate(Route::login());
    }
}
