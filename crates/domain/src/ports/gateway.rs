use async_trait::async_trait;

use crate::api::{ApiRequest, RawResponse};

/// Transport to the service-manager API.
///
/// Implementations never fail: HTTP errors, transport errors and bodies
/// that are not JSON all come back as a [`RawResponse`] whose envelope
/// carries a `code`.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn request(&self, request: ApiRequest) -> RawResponse;
}
