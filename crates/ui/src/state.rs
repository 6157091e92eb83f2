use std::sync::Arc;

use easytv_application::{
    AccountService, AdminDashboardService, DashboardService, LoginService, SessionContext,
};
use easytv_domain::ports::{Gateway, ModalPresenter};
use easytv_domain::routes::landing_route;

use crate::error_handler::ErrorHandler;
use crate::modal::ModalDispatcher;
use crate::navigator::Navigator;

/// 控制台状态
///
/// Everything a controller needs, cheap to clone.
#[derive(Clone)]
pub struct UiState {
    pub gateway: Arc<dyn Gateway>,
    pub session: SessionContext,
    pub dispatcher: ModalDispatcher,
    pub navigator: Navigator,
    pub errors: ErrorHandler,
}

impl UiState {
    /// Start on the landing page for whatever session was restored.
    pub fn new(
        gateway: Arc<dyn Gateway>,
        session: SessionContext,
        presenter: Arc<dyn ModalPresenter>,
    ) -> Self {
        let dispatcher = ModalDispatcher::new(presenter);
        let navigator = Navigator::new(landing_route(session.credentials().as_ref()));
        let errors = ErrorHandler::new(dispatcher.clone(), session.clone(), navigator.clone());
        Self {
            gateway,
            session,
            dispatcher,
            navigator,
            errors,
        }
    }

    pub fn login_service(&self) -> LoginService {
        LoginService::new(self.gateway.clone(), self.session.clone())
    }

    pub fn account_service(&self) -> AccountService {
        AccountService::new(self.gateway.clone(), self.session.clone())
    }

    pub fn dashboard_service(&self) -> DashboardService {
        DashboardService::new(self.gateway.clone(), self.session.clone())
    }

    pub fn admin_service(&self) -> AdminDashboardService {
        AdminDashboardService::new(self.gateway.clone(), self.session.clone())
    }
}
