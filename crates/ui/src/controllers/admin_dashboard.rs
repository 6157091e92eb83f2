use std::collections::BTreeMap;

use easytv_application::PasswordChange;
use easytv_domain::dialog::{ButtonSet, DialogOutcome, ModalData, Template};
use easytv_domain::entities::{CreatedService, RegisteredUser, Service};
use easytv_domain::routes::{active_entries, NavEntry, Page, Route, ADMIN_LEFTBAR};
use tracing::info;

use super::account;
use crate::state::UiState;
use crate::view_state::ViewState;

const API_KEY_POPUP_WIDTH: u32 = 700;

/// Administrator dashboard: users, services and availability.
pub struct AdminDashboardController {
    state: UiState,
    leftbar: BTreeMap<String, bool>,
    services: ViewState<Vec<Service>>,
}

impl AdminDashboardController {
    pub fn new(state: UiState) -> Self {
        let view = state.navigator.view();
        let leftbar = active_entries(ADMIN_LEFTBAR, view.as_deref());
        Self {
            state,
            leftbar,
            services: ViewState::Idle,
        }
    }

    pub fn entries(&self) -> &'static [NavEntry] {
        ADMIN_LEFTBAR
    }

    pub fn leftbar(&self) -> &BTreeMap<String, bool> {
        &self.leftbar
    }

    pub fn services(&self) -> &ViewState<Vec<Service>> {
        &self.services
    }

    pub fn open(&mut self, view: &str) {
        self.state
            .navigator
            .navigate(Route::new(Page::Admin, Some(view)));
        self.leftbar = active_entries(ADMIN_LEFTBAR, Some(view));
    }

    pub async fn register_user(
        &self,
        name: &str,
        username: &str,
        email: &str,
    ) -> Option<RegisteredUser> {
        match self
            .state
            .admin_service()
            .register_user(name, username, email)
            .await
        {
            Ok(user) => {
                let data = ModalData::success()
                    .with_message("password")
                    .with_param(format!(": {}", user.content_owner_password));
                self.state
                    .dispatcher
                    .open_popup(Template::Popup, &data, None)
                    .await;
                Some(user)
            }
            Err(error) => {
                self.state.errors.handle(&error).await;
                None
            }
        }
    }

    pub async fn create_service(&self, name: &str, description: &str) -> Option<CreatedService> {
        match self
            .state
            .admin_service()
            .create_service(name, description)
            .await
        {
            Ok(created) => {
                let data = ModalData::success()
                    .with_message("api_key")
                    .with_param(format!(": {}", created.api_key));
                self.state
                    .dispatcher
                    .open_popup(Template::Popup, &data, Some(API_KEY_POPUP_WIDTH))
                    .await;
                Some(created)
            }
            Err(error) => {
                self.state.errors.handle(&error).await;
                None
            }
        }
    }

    pub async fn load_services(&mut self) -> bool {
        self.services = ViewState::Loading;
        match self.state.admin_service().get_services().await {
            Ok(services) => {
                self.services = ViewState::Ready(services);
                true
            }
            Err(error) => {
                let code = self.state.errors.handle(&error).await;
                self.services = ViewState::Failed(code);
                false
            }
        }
    }

    /// Flip the availability of the listed service at `index` right away,
    /// then ask. Confirm sends the change; decline, dismiss or a failed
    /// request put the flag back. Returns the flag as it ends up.
    pub async fn toggle_service(&mut self, index: usize) -> Option<bool> {
        let (id, name, enabled) = {
            let service = self.services.data_mut()?.get_mut(index)?;
            service.enabled = !service.enabled;
            (service.id, service.name.clone(), service.enabled)
        };

        let (title, message) = if enabled {
            (
                "service_enable_confirmation_title",
                "service_enable_confirmation_msg",
            )
        } else {
            (
                "service_disable_confirmation_title",
                "service_disable_confirmation_msg",
            )
        };
        let data = ModalData::new(title, ButtonSet::OkCancel)
            .with_message(message)
            .with_param(name);

        let outcome = self
            .state
            .dispatcher
            .open_dialog(Template::Dialog, &data)
            .await;
        let applied = match outcome {
            DialogOutcome::Confirm => self.submit_availability(id, enabled).await,
            DialogOutcome::Decline | DialogOutcome::Dismissed => false,
        };

        if !applied {
            self.set_enabled(index, !enabled);
        }
        self.services
            .data()
            .and_then(|services| services.get(index))
            .map(|s| s.enabled)
    }

    async fn submit_availability(&self, id: i64, enable: bool) -> bool {
        match self
            .state
            .admin_service()
            .set_service_availability(id, enable)
            .await
        {
            Ok(_) => {
                info!("服务 {} 可用性已更新为 {}", id, enable);
                self.state
                    .dispatcher
                    .open_popup(Template::Popup, &ModalData::success(), None)
                    .await;
                true
            }
            Err(error) => {
                self.state.errors.handle(&error).await;
                false
            }
        }
    }

    fn set_enabled(&mut self, index: usize, enabled: bool) {
        if let Some(service) = self
            .services
            .data_mut()
            .and_then(|services| services.get_mut(index))
        {
            service.enabled = enabled;
        }
    }

    pub async fn change_password(&self, change: &PasswordChange) -> bool {
        account::change_password(&self.state, change).await
    }

    pub async fn logout(&self) -> Route {
        account::logout(&self.state).await
    }
}
