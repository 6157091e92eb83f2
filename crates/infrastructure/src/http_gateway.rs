use std::time::Duration;

use async_trait::async_trait;
use easytv_core::{ApiConfig, ConsoleError, ConsoleResult};
use easytv_domain::api::{ApiRequest, Method, RawResponse, SESSION_HEADER};
use easytv_domain::codes::{ErrorCode, ServerCode};
use easytv_domain::ports::Gateway;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// 基于reqwest的HTTP网关
///
/// 所有结果都折叠为 `RawResponse`：传输失败合成 `-500` 信封，
/// 非JSON或缺少 `code` 的响应按HTTP状态码合成信封。不做重试。
#[derive(Debug, Clone)]
pub struct ReqwestGateway {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestGateway {
    pub fn new(config: &ApiConfig) -> ConsoleResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| ConsoleError::Network(format!("无法创建HTTP客户端: {e}")))?;
        Ok(Self::with_client(client, config.normalized_base_url()))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

fn http_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Envelope code standing in for a response that carried none.
fn fallback_code(status: u16) -> i64 {
    let code = match status {
        400 => ServerCode::MissingInput,
        401 | 403 => ServerCode::NoSession,
        404 => ServerCode::NotFound,
        _ => ServerCode::InternalServerError,
    };
    code.code()
}

/// Normalise a received body so that it always carries a `code`.
///
/// A body whose `code` parses as a number or a string identifier passes
/// through untouched.
pub(crate) fn envelope_from_body(status: u16, bytes: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(body) if body.get("code").and_then(ErrorCode::from_value).is_some() => body,
        Ok(body) => json!({
            "code": fallback_code(status),
            "description": format!("HTTP {status}: response without code"),
            "body": body,
        }),
        Err(_) => {
            let text = String::from_utf8_lossy(bytes);
            let snippet: String = text.chars().take(200).collect();
            json!({
                "code": fallback_code(status),
                "description": format!("HTTP {status}: {}", snippet.trim()),
            })
        }
    }
}

#[async_trait]
impl Gateway for ReqwestGateway {
    async fn request(&self, request: ApiRequest) -> RawResponse {
        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(http_method(request.method), &url);
        if let Some(token) = &request.token {
            builder = builder.header(SESSION_HEADER, token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("请求失败 {} {}: {}", request.method, url, e);
                return RawResponse::transport_failure(e.to_string());
            }
        };

        let status = response.status().as_u16();
        match response.bytes().await {
            Ok(bytes) => {
                let body = envelope_from_body(status, &bytes);
                let code = body.get("code").cloned().unwrap_or_default();
                debug!("{} {} -> HTTP {} code {}", request.method, url, status, code);
                RawResponse::new(Some(status), body)
            }
            Err(e) => {
                warn!("读取响应失败 {} {}: {}", request.method, url, e);
                RawResponse::transport_failure(e.to_string())
            }
        }
    }
}
