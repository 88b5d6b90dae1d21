use std::sync::Arc;
use std::time::Instant;

use axum::body::Bytes;
use axum::extract::{Extension, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{routing::post, Router};
use gateway_common::{InvocationRequest, InvocationResponse};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::logging::RequestId;
use crate::AppState;

/// POST /gateway - replay the described call against the backend
///
/// The body is read as raw bytes so that undecodable requests still get an
/// envelope instead of an extractor rejection.
async fn delegate(
    State(state): State<Arc<AppState>>,
    request_id: Option<Extension<RequestId>>,
    body: Bytes,
) -> Result<Response> {
    let invocation_id = request_id.map_or_else(Uuid::new_v4, |Extension(RequestId(id))| id);
    let start = Instant::now();

    let request: InvocationRequest = serde_json::from_slice(&body)
        .map_err(|e| Error::InvalidRequest(format!("Invalid invocation request: {}", e)))?;

    tracing::debug!(
        %invocation_id,
        method = %request.method,
        path = %request.path,
        "Delegating invocation to {}",
        state.backend.base_url()
    );

    match state.backend.invoke(&request).await {
        Ok(response) => {
            tracing::info!(
                %invocation_id,
                status = ?response.status_code,
                latency_ms = %start.elapsed().as_millis(),
                "Invocation completed"
            );
            Ok(envelope(StatusCode::OK, &response))
        }
        Err(e) => {
            tracing::warn!(%invocation_id, "Invocation failed: {}", e);
            Err(e)
        }
    }
}

/// Pretty-printed JSON response carrying an envelope.
pub fn envelope(status: StatusCode, body: &InvocationResponse) -> Response {
    match serde_json::to_string_pretty(body) {
        Ok(json) => (status, [(header::CONTENT_TYPE, "application/json")], json).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/gateway", post(delegate))
        .with_state(state)
}
