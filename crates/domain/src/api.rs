use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use easytv_core::ConsoleError;
use thiserror::Error;

use crate::codes::{ClientError, ErrorCode, ServerCode, CODE_OK};

pub const SESSION_HEADER: &str = "X-EasyTV-Session";

pub mod endpoints {
    pub const LOGIN: &str = "/api/user/login";
    pub const LOGOUT: &str = "/api/user/logout";
    pub const CHANGE_PASSWORD: &str = "/api/user/change_password";
    pub const SERVICES: &str = "/api/service";
    pub const JOBS: &str = "/api/job";
    pub const ADMIN_REGISTER_USER: &str = "/adm/user/register";
    pub const ADMIN_SERVICES: &str = "/adm/service";

    pub fn service(id: i64) -> String {
        format!("{SERVICES}/{id}")
    }

    pub fn job(id: i64) -> String {
        format!("{JOBS}/{id}")
    }

    /// One page of at most `limit` jobs, older than `before` when given.
    pub fn jobs_page(limit: u32, before: Option<i64>) -> String {
        match before {
            Some(job_id) => format!("{JOBS}/limit/{limit}/before/{job_id}"),
            None => format!("{JOBS}/limit/{limit}"),
        }
    }

    pub fn admin_service(id: i64) -> String {
        format!("{ADMIN_SERVICES}/{id}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub token: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>, body: Option<Value>) -> Self {
        Self {
            method,
            path: path.into(),
            token: None,
            body,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path, None)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path, Some(body))
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path, Some(body))
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path, None)
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

/// Whatever came back from a gateway call.
///
/// Success and failure share this shape; callers branch on the envelope `code`.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    /// `None` when no HTTP exchange took place
    pub http_status: Option<u16>,
    pub body: Value,
}

impl RawResponse {
    pub fn new(http_status: Option<u16>, body: Value) -> Self {
        Self { http_status, body }
    }

    /// Envelope standing in for a request that never produced a response.
    pub fn transport_failure(description: impl Into<String>) -> Self {
        Self {
            http_status: None,
            body: json!({
                "code": ServerCode::InternalServerError.code(),
                "description": description.into(),
            }),
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.body.get("code").and_then(ErrorCode::from_value)
    }

    pub fn is_ok(&self) -> bool {
        self.body.get("code").and_then(Value::as_i64) == Some(CODE_OK)
    }

    pub fn description(&self) -> Option<&str> {
        self.body.get("description").and_then(Value::as_str)
    }

    /// Turn the envelope into a typed outcome: `code == 200` decodes `T` from
    /// the body, any other code becomes a [`ServiceError::Rejected`].
    pub fn into_result<T: DeserializeOwned>(self) -> ServiceResult<T> {
        if self.is_ok() {
            return serde_json::from_value(self.body)
                .map_err(|e| ServiceError::Malformed(e.to_string()));
        }

        let description = self.description().unwrap_or_default().to_string();
        match self.code() {
            Some(code) => Err(ServiceError::Rejected { code, description }),
            None => Err(ServiceError::Malformed(format!(
                "response without code (http status {:?})",
                self.http_status
            ))),
        }
    }
}

/// Outcome of a domain service call that did not succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("client validation failed: {0}")]
    Client(ClientError),

    #[error("server rejected the request ({code}): {description}")]
    Rejected { code: ErrorCode, description: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    /// The call went through but local state (session file) could not be updated.
    #[error("local state error: {0}")]
    Local(String),
}

impl ServiceError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::Client(client) => ErrorCode::Client(*client),
            ServiceError::Rejected { code, .. } => code.clone(),
            ServiceError::Malformed(_) | ServiceError::Local(_) => {
                ErrorCode::Server(ServerCode::InternalServerError)
            }
        }
    }

    /// Server-provided text, when there is one.
    pub fn description(&self) -> Option<&str> {
        match self {
            ServiceError::Rejected { description, .. } if !description.is_empty() => {
                Some(description.as_str())
            }
            ServiceError::Malformed(msg) | ServiceError::Local(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn is_client_side(&self) -> bool {
        matches!(self, ServiceError::Client(_))
    }
}

impl From<ClientError> for ServiceError {
    fn from(e: ClientError) -> Self {
        ServiceError::Client(e)
    }
}

impl From<ConsoleError> for ServiceError {
    fn from(e: ConsoleError) -> Self {
        ServiceError::Local(e.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Acknowledged, CreatedService};

    #[test]
    fn test_into_result_success() {
        let response = RawResponse::new(
            Some(200),
            json!({"code": 200, "description": "Success", "api_key": "k-1", "service_id": 4}),
        );
        let created: CreatedService = response.into_result().unwrap();
        assert_eq!(created.api_key, "k-1");
        assert_eq!(created.service_id, Some(4));
    }

    #[test]
    fn test_into_result_rejected() {
        let response = RawResponse::new(
            Some(200),
            json!({"code": -22, "description": "name in use"}),
        );
        let error = response.into_result::<Acknowledged>().unwrap_err();
        assert_eq!(error.code(), ErrorCode::Server(ServerCode::ServiceNameInUse));
        assert_eq!(error.description(), Some("name in use"));
    }

    #[test]
    fn test_into_result_without_code_is_malformed() {
        let response = RawResponse::new(Some(502), json!("Bad Gateway"));
        let error = response.into_result::<Acknowledged>().unwrap_err();
        assert!(matches!(error, ServiceError::Malformed(_)));
        assert_eq!(error.code(), ErrorCode::Server(ServerCode::InternalServerError));
    }

    #[test]
    fn test_transport_failure_shape() {
        let response = RawResponse::transport_failure("connection refused");
        assert_eq!(response.http_status, None);
        assert_eq!(
            response.code(),
            Some(ErrorCode::Server(ServerCode::InternalServerError))
        );
        assert_eq!(response.description(), Some("connection refused"));
    }

    #[test]
    fn test_request_builders() {
        let request = ApiRequest::put(endpoints::admin_service(3), json!({"enable": true}))
            .with_token(Some("t".to_string()));
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/adm/service/3");
        assert_eq!(request.token.as_deref(), Some("t"));
        assert_eq!(ApiRequest::delete(endpoints::job(9)).path, "/api/job/9");
        assert_eq!(endpoints::jobs_page(20, Some(41)), "/api/job/limit/20/before/41");
        assert_eq!(endpoints::jobs_page(5, None), "/api/job/limit/5");
    }
}
