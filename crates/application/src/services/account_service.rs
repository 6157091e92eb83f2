use std::sync::Arc;

use easytv_domain::api::{endpoints, ApiRequest, ServiceResult};
use easytv_domain::codes::ClientError;
use easytv_domain::entities::Acknowledged;
use easytv_domain::ports::Gateway;
use easytv_domain::routes::Route;
use serde_json::json;
use tracing::{debug, warn};

use super::dispatch;
use crate::session::SessionContext;
use crate::validation::require_filled;

/// The three fields of the change-password form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
    pub new_password_verification: String,
}

impl PasswordChange {
    pub fn new(old: &str, new: &str, verification: &str) -> Self {
        Self {
            old_password: old.to_string(),
            new_password: new.to_string(),
            new_password_verification: verification.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        require_filled(&[
            &self.old_password,
            &self.new_password,
            &self.new_password_verification,
        ])?;
        if self.new_password != self.new_password_verification {
            return Err(ClientError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Account actions shared by both dashboards.
pub struct AccountService {
    gateway: Arc<dyn Gateway>,
    session: SessionContext,
}

impl AccountService {
    pub fn new(gateway: Arc<dyn Gateway>, session: SessionContext) -> Self {
        Self { gateway, session }
    }

    /// Tell the server, then forget the session whatever it answered.
    pub async fn logout(&self) -> Route {
        let response = self
            .gateway
            .request(ApiRequest::delete(endpoints::LOGOUT).with_token(self.session.token()))
            .await;
        debug!("注销响应: {:?}", response.code());

        if let Err(e) = self.session.terminate() {
            warn!("清除本地会话失败: {}", e);
        }
        Route::login()
    }

    pub async fn change_password(&self, change: &PasswordChange) -> ServiceResult<Acknowledged> {
        change.validate()?;
        let body = json!({
            "old_password": change.old_password,
            "new_password": change.new_password,
            "new_password_verification": change.new_password_verification,
        });
        dispatch(
            self.gateway.as_ref(),
            ApiRequest::post(endpoints::CHANGE_PASSWORD, body).with_token(self.session.token()),
        )
        .await
    }
}
