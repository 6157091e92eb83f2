use std::sync::Arc;

use easytv_domain::api::{endpoints, ApiRequest, ServiceResult};
use easytv_domain::entities::{LoginGrant, Session};
use easytv_domain::ports::Gateway;
use easytv_domain::routes::{landing_route, Route};
use serde_json::json;
use tracing::info;

use super::dispatch;
use crate::session::SessionContext;
use crate::validation::require_filled;

/// A successful login: the stored session and the page to open next.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginOutcome {
    pub session: Session,
    pub route: Route,
}

pub struct LoginService {
    gateway: Arc<dyn Gateway>,
    session: SessionContext,
}

impl LoginService {
    pub fn new(gateway: Arc<dyn Gateway>, session: SessionContext) -> Self {
        Self { gateway, session }
    }

    pub async fn login(&self, username: &str, password: &str) -> ServiceResult<LoginOutcome> {
        require_filled(&[username, password])?;

        let grant: LoginGrant = dispatch(
            self.gateway.as_ref(),
            ApiRequest::post(
                endpoints::LOGIN,
                json!({"username": username, "password": password}),
            ),
        )
        .await?;

        // only admins get the flag at all
        let is_admin = grant.is_admin.unwrap_or(false);
        let session = self.session.establish(grant.session_token, is_admin)?;
        let route = landing_route(Some(&session.credentials()));
        info!("用户 {} 登录成功", username);

        Ok(LoginOutcome { session, route })
    }
}
