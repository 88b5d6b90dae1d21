//! JSON protocol types for invoker-gateway communication.
//!
//! # Protocol Overview
//!
//! The invoker POSTs an [`InvocationRequest`] to `/gateway`. The gateway
//! replays it against its backend and answers with an [`InvocationResponse`]
//! envelope:
//!
//! - `success: true`: the backend answered. The envelope carries its
//!   `status-code`, `status-message`, `http-version`, `headers` and `body`.
//! - `success: false`: the call could not be made. The envelope carries
//!   `error` and `reason`.
//!
//! Field names on the wire are kebab-case.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request sent to the gateway describing the backend call to make.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// Backend path, e.g. `/`.
    #[serde(default = "default_path")]
    pub path: String,
    /// HTTP method, case-insensitive on input.
    #[serde(default = "default_method")]
    pub method: String,
    /// Query parameters, form-encoded into the backend URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<serde_json::Map<String, serde_json::Value>>,
    /// JSON object sent as the backend request body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Map<String, serde_json::Value>>,
}

fn default_path() -> String {
    "/".to_string()
}

fn default_method() -> String {
    "GET".to_string()
}

impl InvocationRequest {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            query: None,
            body: None,
        }
    }

    /// The request the test page sends on every click: `GET /`.
    pub fn root() -> Self {
        Self::new(default_path(), default_method())
    }

    pub fn with_query(mut self, query: serde_json::Map<String, serde_json::Value>) -> Self {
        self.query = Some(query);
        self
    }
}

/// HTTP protocol version of the backend response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpVersion {
    #[serde(rename = "HTTP_1_0")]
    Http10,
    #[serde(rename = "HTTP_1_1")]
    Http11,
    #[serde(rename = "HTTP_2")]
    Http2,
    #[serde(rename = "HTTP_3")]
    Http3,
}

/// Envelope returned by the gateway.
///
/// Only `success` is guaranteed; every other field depends on it and is
/// optional when decoding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InvocationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_version: Option<HttpVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl InvocationResponse {
    /// Envelope for a backend that answered.
    pub fn succeeded(status_code: u16, status_message: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            success: true,
            status_code: Some(status_code),
            status_message: Some(status_message.into()),
            body: Some(body.into()),
            ..Default::default()
        }
    }

    /// Envelope for a call that could not be made.
    pub fn failed(error: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            reason: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn with_http_version(mut self, version: HttpVersion) -> Self {
        self.http_version = Some(version);
        self
    }

    pub fn with_headers(mut self, headers: BTreeMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }
}
