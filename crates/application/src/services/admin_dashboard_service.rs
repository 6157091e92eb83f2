use std::sync::Arc;

use easytv_domain::api::{endpoints, ApiRequest, ServiceResult};
use easytv_domain::entities::{
    Acknowledged, CreatedService, RegisteredUser, Service, ServiceDetail, ServiceList,
};
use easytv_domain::ports::Gateway;
use serde_json::json;
use tracing::info;

use super::dispatch;
use crate::session::SessionContext;
use crate::validation::{require_email, require_filled};

/// Administrator operations: content owners and services.
pub struct AdminDashboardService {
    gateway: Arc<dyn Gateway>,
    session: SessionContext,
}

impl AdminDashboardService {
    pub fn new(gateway: Arc<dyn Gateway>, session: SessionContext) -> Self {
        Self { gateway, session }
    }

    fn authorized(&self, request: ApiRequest) -> ApiRequest {
        request.with_token(self.session.token())
    }

    /// Register a content owner; the reply carries the generated password.
    pub async fn register_user(
        &self,
        name: &str,
        username: &str,
        email: &str,
    ) -> ServiceResult<RegisteredUser> {
        require_filled(&[name, username, email])?;
        require_email(email)?;

        let user: RegisteredUser = dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::post(
                endpoints::ADMIN_REGISTER_USER,
                json!({"name": name, "username": username, "email": email}),
            )),
        )
        .await?;
        info!("已注册内容所有者 {} ({:?})", username, user.content_owner_id);
        Ok(user)
    }

    pub async fn create_service(&self, name: &str, description: &str) -> ServiceResult<CreatedService> {
        require_filled(&[name, description])?;
        dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::post(
                endpoints::ADMIN_SERVICES,
                json!({"name": name, "description": description}),
            )),
        )
        .await
    }

    pub async fn get_services(&self) -> ServiceResult<Vec<Service>> {
        let list: ServiceList = dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::get(endpoints::ADMIN_SERVICES)),
        )
        .await?;
        Ok(list.services)
    }

    /// A service with its API key.
    pub async fn get_service(&self, id: i64) -> ServiceResult<Service> {
        let detail: ServiceDetail = dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::get(endpoints::admin_service(id))),
        )
        .await?;
        Ok(detail.service)
    }

    pub async fn set_service_availability(&self, id: i64, enable: bool) -> ServiceResult<Acknowledged> {
        dispatch(
            self.gateway.as_ref(),
            self.authorized(ApiRequest::put(
                endpoints::admin_service(id),
                json!({"enable": enable}),
            )),
        )
        .await
    }
}
