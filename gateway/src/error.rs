//! Error types for the gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gateway_common::InvocationResponse;

use crate::routes::gateway::envelope;

/// Errors surfaced to the invoker as a `success: false` envelope.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The invocation request could not be understood.
    #[error("{0}")]
    InvalidRequest(String),

    /// The backend could not be reached or did not answer.
    #[error("{0}")]
    InvocationFailed(String),
}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidRequest(_) => "invalid request",
            Error::InvocationFailed(_) => "invocation failed",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = InvocationResponse::failed(self.kind(), self.to_string());
        envelope(StatusCode::BAD_REQUEST, &body)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
