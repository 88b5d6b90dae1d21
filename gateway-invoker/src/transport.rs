//! HTTP transport used to reach the gateway.

use async_trait::async_trait;
use gateway_common::{InvocationRequest, InvocationResponse};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::error::TransportError;

/// Content type of every invocation request.
pub const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// Sends an invocation request and decodes the gateway's envelope.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(
        &self,
        endpoint: &str,
        request: &InvocationRequest,
    ) -> Result<InvocationResponse, TransportError>;
}

/// reqwest-backed transport.
///
/// The client has no response cache and no timeout; only the content type
/// header is set explicitly.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(
        &self,
        endpoint: &str,
        request: &InvocationRequest,
    ) -> Result<InvocationResponse, TransportError> {
        let payload = serde_json::to_vec(request)?;

        let response = self
            .http_client
            .post(endpoint)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(payload)
            .send()
            .await?;

        // The envelope is decoded whatever the status: the gateway reports
        // `success: false` with a 400.
        let status = response.status();
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            tracing::debug!(status = %status, "Gateway body is not an envelope: {}", e);
            TransportError::from(e)
        })
    }
}
