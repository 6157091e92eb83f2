use std::collections::BTreeMap;

use easytv_application::PasswordChange;
use easytv_domain::routes::{active_entries, NavEntry, Page, Route, DASHBOARD_LEFTBAR};

use super::account;
use crate::state::UiState;

/// Content-owner dashboard frame: leftbar and account actions.
pub struct DashboardController {
    state: UiState,
    leftbar: BTreeMap<String, bool>,
}

impl DashboardController {
    pub fn new(state: UiState) -> Self {
        let view = state.navigator.view();
        let leftbar = active_entries(DASHBOARD_LEFTBAR, view.as_deref());
        Self { state, leftbar }
    }

    pub fn entries(&self) -> &'static [NavEntry] {
        DASHBOARD_LEFTBAR
    }

    pub fn leftbar(&self) -> &BTreeMap<String, bool> {
        &self.leftbar
    }

    pub fn open(&mut self, view: &str) {
        self.state
            .navigator
            .navigate(Route::new(Page::Dashboard, Some(view)));
        self.leftbar = active_entries(DASHBOARD_LEFTBAR, Some(view));
    }

    pub async fn change_password(&self, change: &PasswordChange) -> bool {
        account::change_password(&self.state, change).await
    }
}
