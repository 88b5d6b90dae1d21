//! HTTP client replaying invocation requests against the backend.

use std::collections::BTreeMap;

use gateway_common::{HttpVersion, InvocationRequest, InvocationResponse};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::{Client, Method, Url, Version};

use crate::error::{Error, Result};

/// Client for the backend HTTP server.
pub struct BackendClient {
    http_client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform the described call and wrap the backend's answer.
    ///
    /// Any HTTP status from the backend is a successful invocation; only
    /// failing to get an answer is an error.
    pub async fn invoke(&self, request: &InvocationRequest) -> Result<InvocationResponse> {
        let method = parse_method(&request.method)?;
        let url = self.url_for(request)?;

        let mut builder = self.http_client.request(method, url);
        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Error::InvocationFailed(e.to_string()))?;

        let status = response.status();
        let version = http_version(response.version());
        let headers = headers_to_map(response.headers());
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        let text = response
            .text()
            .await
            .map_err(|e| Error::InvocationFailed(e.to_string()))?;
        let body = if is_json { pretty_json(&text) } else { text };

        let mut envelope = InvocationResponse::succeeded(
            status.as_u16(),
            status.canonical_reason().unwrap_or_default(),
            body,
        )
        .with_headers(headers);
        if let Some(version) = version {
            envelope = envelope.with_http_version(version);
        }

        Ok(envelope)
    }

    /// Backend URL for the request: base, path, then the form-encoded query.
    fn url_for(&self, request: &InvocationRequest) -> Result<Url> {
        let path = if request.path.starts_with('/') {
            request.path.clone()
        } else {
            format!("/{}", request.path)
        };

        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| Error::InvalidRequest(format!("Invalid path {}: {}", request.path, e)))?;

        if let Some(ref query) = request.query {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                let value = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                pairs.append_pair(key, &value);
            }
        }

        Ok(url)
    }
}

/// Only the standard verbs are accepted; extension methods are rejected.
fn parse_method(method: &str) -> Result<Method> {
    match method.to_uppercase().as_str() {
        "GET" => Ok(Method::GET),
        "HEAD" => Ok(Method::HEAD),
        "POST" => Ok(Method::POST),
        "PUT" => Ok(Method::PUT),
        "DELETE" => Ok(Method::DELETE),
        "PATCH" => Ok(Method::PATCH),
        "OPTIONS" => Ok(Method::OPTIONS),
        "TRACE" => Ok(Method::TRACE),
        "CONNECT" => Ok(Method::CONNECT),
        _ => Err(Error::InvalidRequest(format!("Unsupported method: {}", method))),
    }
}

fn http_version(version: Version) -> Option<HttpVersion> {
    if version == Version::HTTP_10 {
        Some(HttpVersion::Http10)
    } else if version == Version::HTTP_11 {
        Some(HttpVersion::Http11)
    } else if version == Version::HTTP_2 {
        Some(HttpVersion::Http2)
    } else if version == Version::HTTP_3 {
        Some(HttpVersion::Http3)
    } else {
        None
    }
}

/// Repeated headers keep their last value.
fn headers_to_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

/// Re-encode a JSON body pretty-printed; bodies that do not parse pass through.
fn pretty_json(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(path: &str) -> InvocationRequest {
        InvocationRequest::new(path, "GET")
    }

    #[test]
    fn test_base_url_normalization() {
        let client = BackendClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_url_for_plain_path() {
        let client = BackendClient::new("http://localhost:8080");
        let url = client.url_for(&request("/items/1")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/items/1");
    }

    #[test]
    fn test_url_for_adds_missing_slash() {
        let client = BackendClient::new("http://localhost:8080");
        let url = client.url_for(&request("items")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/items");
    }

    #[test]
    fn test_url_for_form_encodes_query() {
        let client = BackendClient::new("http://localhost:8080");
        let query = json!({"name": "a b&c", "page": 2, "flag": true});
        let req = request("/search").with_query(query.as_object().unwrap().clone());

        let url = client.url_for(&req).unwrap();
        // serde_json::Map iterates in key order.
        assert_eq!(url.query(), Some("flag=true&name=a+b%26c&page=2"));
    }

    #[test]
    fn test_parse_method_is_case_insensitive() {
        assert_eq!(parse_method("post").unwrap(), Method::POST);
        assert_eq!(parse_method("Delete").unwrap(), Method::DELETE);
        assert_eq!(parse_method("options").unwrap(), Method::OPTIONS);
        assert!(matches!(parse_method("GE T"), Err(Error::InvalidRequest(_))));
        assert!(matches!(parse_method("foo"), Err(Error::InvalidRequest(_))));
        assert!(matches!(parse_method("PROPFIND"), Err(Error::InvalidRequest(_))));
    }

    #[test]
    fn test_http_version_mapping() {
        assert_eq!(http_version(Version::HTTP_11), Some(HttpVersion::Http11));
        assert_eq!(http_version(Version::HTTP_2), Some(HttpVersion::Http2));
        assert_eq!(http_version(Version::HTTP_09), None);
    }

    #[test]
    fn test_pretty_json() {
        assert_eq!(pretty_json(r#"{"a":1}"#), "{\n  \"a\": 1\n}");
        assert_eq!(pretty_json("not json"), "not json");
    }
}
