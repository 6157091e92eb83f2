//! 应用服务
//!
//! One service per screen family. Each operation validates locally, makes
//! at most one gateway call and decodes the envelope into a `ServiceResult`.

pub mod account_service;
pub mod admin_dashboard_service;
pub mod dashboard_service;
pub mod login_service;

pub use account_service::{AccountService, PasswordChange};
pub use admin_dashboard_service::AdminDashboardService;
pub use dashboard_service::DashboardService;
pub use login_service::{LoginOutcome, LoginService};

use easytv_domain::api::{ApiRequest, ServiceResult};
use easytv_domain::ports::Gateway;
use serde::de::DeserializeOwned;
use tracing::debug;

pub(crate) async fn dispatch<T: DeserializeOwned>(
    gateway: &dyn Gateway,
    request: ApiRequest,
) -> ServiceResult<T> {
    let label = format!("{} {}", request.method, request.path);
    let result = gateway.request(request).await.into_result();
    if let Err(e) = &result {
        debug!("{} 失败: {}", label, e);
    }
    result
}
