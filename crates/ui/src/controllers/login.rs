use easytv_core::ConsoleResult;
use easytv_domain::api::ServiceError;
use easytv_domain::dialog::{ButtonSet, ModalData, Template};
use easytv_domain::entities::Language;
use tracing::info;

use crate::modal::error_modal;
use crate::state::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    Anonymous,
    Authenticating,
    AuthenticatedAdmin,
    AuthenticatedUser,
}

pub struct LoginController {
    state: UiState,
    login: LoginState,
    last_error: Option<String>,
}

impl LoginController {
    pub fn new(state: UiState) -> Self {
        let login = match state.session.current() {
            Some(session) if session.is_admin => LoginState::AuthenticatedAdmin,
            Some(_) => LoginState::AuthenticatedUser,
            None => LoginState::Anonymous,
        };
        Self {
            state,
            login,
            last_error: None,
        }
    }

    pub fn state(&self) -> LoginState {
        self.login
    }

    /// Text of the last failed attempt, as the server worded it.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn languages(&self) -> &'static [Language] {
        &Language::ALL
    }

    pub fn change_language(&self, language: Language) -> ConsoleResult<()> {
        self.state.session.set_language(language)
    }

    pub async fn submit(&mut self, username: &str, password: &str) -> LoginState {
        self.login = LoginState::Authenticating;
        self.last_error = None;

        match self.state.login_service().login(username, password).await {
            Ok(outcome) => {
                self.login = if outcome.session.is_admin {
                    LoginState::AuthenticatedAdmin
                } else {
                    LoginState::AuthenticatedUser
                };
                info!("登录成功，跳转到 {}", outcome.route);
                self.state.navigator.navigate(outcome.route);
            }
            Err(error) => {
                self.login = LoginState::Anonymous;
                self.report(&error).await;
            }
        }
        self.login
    }

    async fn report(&mut self, error: &ServiceError) {
        let data = match error.description() {
            Some(description) if !error.is_client_side() => {
                self.last_error = Some(description.to_string());
                ModalData::new("error", ButtonSet::Ok).with_param(description)
            }
            _ => {
                let data = error_modal(&error.code());
                self.last_error = data.message.clone();
                data
            }
        };
        self.state
            .dispatcher
            .open_popup(Template::Popup, &data, None)
            .await;
    }
}
