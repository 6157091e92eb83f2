//! Test helper utilities
//!
//! Envelope constructors mirroring what the API sends, and session stores
//! that start out logged in.

use std::sync::Arc;

use easytv_domain::api::RawResponse;
use easytv_domain::entities::StoredCredentials;
use easytv_domain::ports::SessionStore;
use easytv_infrastructure::InMemorySessionStore;
use serde_json::{json, Value};

pub const TEST_TOKEN: &str = "test-session-token";

/// `{"code": 200, "description": "Success", ..fields}`
pub fn ok_body(fields: Value) -> Value {
    let mut body = json!({"code": 200, "description": "Success"});
    if let (Some(target), Value::Object(extra)) = (body.as_object_mut(), fields) {
        target.extend(extra);
    }
    body
}

pub fn ok_envelope(fields: Value) -> RawResponse {
    RawResponse::new(Some(200), ok_body(fields))
}

pub fn error_body(code: i64, description: &str) -> Value {
    json!({"code": code, "description": description})
}

pub fn error_envelope(code: i64, description: &str) -> RawResponse {
    RawResponse::new(Some(200), error_body(code, description))
}

pub fn credentials(is_admin: bool) -> StoredCredentials {
    StoredCredentials {
        token: TEST_TOKEN.to_string(),
        is_admin,
    }
}

pub fn empty_store() -> Arc<dyn SessionStore> {
    Arc::new(InMemorySessionStore::new())
}

pub fn user_store() -> Arc<dyn SessionStore> {
    Arc::new(InMemorySessionStore::with_credentials(credentials(false)))
}

pub fn admin_store() -> Arc<dyn SessionStore> {
    Arc::new(InMemorySessionStore::with_credentials(credentials(true)))
}
