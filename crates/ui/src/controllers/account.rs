use std::collections::BTreeMap;

use easytv_application::PasswordChange;
use easytv_domain::dialog::{ModalData, Template};
use easytv_domain::routes::{active_entries, NavEntry, Route, ACCOUNT_MENU};

use crate::state::UiState;

pub struct AccountController {
    state: UiState,
    active: BTreeMap<String, bool>,
}

impl AccountController {
    pub fn new(state: UiState) -> Self {
        let active = active_entries(ACCOUNT_MENU, None);
        Self { state, active }
    }

    pub fn menu(&self) -> &'static [NavEntry] {
        ACCOUNT_MENU
    }

    pub fn active(&self) -> &BTreeMap<String, bool> {
        &self.active
    }

    /// Open the change-password form.
    pub fn request_change_password(&mut self) {
        self.active = active_entries(ACCOUNT_MENU, Some("change_password"));
    }

    pub async fn logout(&self) -> Route {
        logout(&self.state).await
    }

    pub async fn change_password(&mut self, change: &PasswordChange) -> bool {
        let changed = change_password(&self.state, change).await;
        if changed {
            self.active = active_entries(ACCOUNT_MENU, None);
        }
        changed
    }
}

pub(crate) async fn logout(state: &UiState) -> Route {
    let route = state.account_service().logout().await;
    state.navigator.navigate(route.clone());
    route
}

/// Submit the form. On success a confirmation dialog is shown and the
/// user is logged out once it closes, whatever the answer.
pub(crate) async fn change_password(state: &UiState, change: &PasswordChange) -> bool {
    match state.account_service().change_password(change).await {
        Ok(_) => {
            let data = ModalData::success().with_message("password_changed");
            state.dispatcher.open_dialog(Template::Popup, &data).await;
            logout(state).await;
            true
        }
        Err(error) => {
            state.errors.handle(&error).await;
            false
        }
    }
}
