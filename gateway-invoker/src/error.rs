//! Error types for gateway invocation.

/// Failure to obtain a usable envelope from the gateway.
///
/// Timeouts, network errors and unparseable bodies all end up in the same
/// rendering branch; they only differ in their status text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Invalid response: {0}")]
    Parse(String),

    #[error("HTTP request failed: {0}")]
    Network(String),
}

impl TransportError {
    /// Status text shown to the user, in the vocabulary browsers' ajax
    /// clients report.
    pub fn status_text(&self) -> &'static str {
        match self {
            TransportError::Timeout => "timeout",
            TransportError::Parse(_) => "parsererror",
            TransportError::Network(_) => "error",
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_decode() {
            TransportError::Parse(e.to_string())
        } else {
            TransportError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(e: serde_json::Error) -> Self {
        TransportError::Parse(e.to_string())
    }
}
