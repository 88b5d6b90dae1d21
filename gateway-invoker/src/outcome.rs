//! Mapping of invocation results to rendered messages.

use std::collections::BTreeMap;
use std::fmt;

use gateway_common::InvocationResponse;

use crate::error::TransportError;

/// Visual style of a rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Success,
    Warning,
    Danger,
}

impl Style {
    /// CSS class applied to the result paragraph.
    pub fn css_class(&self) -> &'static str {
        match self {
            Style::Success => "bg-success",
            Style::Warning => "bg-warning",
            Style::Danger => "bg-danger",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Style::Success => "success",
            Style::Warning => "warning",
            Style::Danger => "danger",
        };
        f.write_str(name)
    }
}

/// Result of one gateway invocation, ready to be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The gateway reached the backend.
    Completed {
        status_code: Option<u16>,
        status_message: String,
        headers: BTreeMap<String, String>,
        body: String,
    },
    /// The gateway answered with `success: false`.
    Rejected { error: String, reason: String },
    /// No envelope could be obtained.
    TransportFailed { status_text: String },
}

impl Outcome {
    pub fn from_response(response: InvocationResponse) -> Self {
        if response.success {
            Outcome::Completed {
                status_code: response.status_code,
                status_message: response.status_message.unwrap_or_default(),
                headers: response.headers.unwrap_or_default(),
                body: response.body.unwrap_or_default(),
            }
        } else {
            Outcome::Rejected {
                error: response.error.unwrap_or_default(),
                reason: response.reason.unwrap_or_default(),
            }
        }
    }

    pub fn from_transport_error(error: &TransportError) -> Self {
        Outcome::TransportFailed {
            status_text: error.status_text().to_string(),
        }
    }

    pub fn from_result(result: Result<InvocationResponse, TransportError>) -> Self {
        match result {
            Ok(response) => Self::from_response(response),
            Err(e) => Self::from_transport_error(&e),
        }
    }

    /// A missing status code is not below 400, so it renders as a warning.
    pub fn style(&self) -> Style {
        match self {
            Outcome::Completed {
                status_code: Some(code),
                ..
            } if *code < 400 => Style::Success,
            Outcome::Completed { .. } => Style::Warning,
            Outcome::Rejected { .. } | Outcome::TransportFailed { .. } => Style::Danger,
        }
    }

    /// Plain-text form of the message.
    pub fn message(&self) -> String {
        self.compose(&Plain)
    }

    /// HTML fragment written to the output element.
    ///
    /// Values coming from the response are escaped.
    pub fn to_html(&self) -> String {
        format!(
            "<p class='{} result'>{}</p>",
            self.style().css_class(),
            self.compose(&Html)
        )
    }

    fn compose(&self, markup: &dyn Markup) -> String {
        match self {
            Outcome::Completed {
                status_code,
                status_message,
                headers,
                body,
            } => {
                let code = status_code.map(|c| c.to_string()).unwrap_or_default();
                let mut out = format!(
                    "{} {} {}{}{}{}",
                    markup.label("Status:"),
                    markup.text(&code),
                    markup.text(status_message),
                    markup.line_break(),
                    markup.label("Headers:"),
                    markup.line_break(),
                );
                for (name, value) in headers {
                    out.push_str(&markup.text(name));
                    out.push_str(": ");
                    out.push_str(&markup.text(value));
                    out.push_str(markup.line_break());
                }
                out.push_str(markup.line_break());
                out.push_str(&markup.label("Content:"));
                out.push_str(markup.line_break());
                out.push_str(&markup.text(body));
                out
            }
            Outcome::Rejected { error, reason } => {
                format!("{}: {}", markup.text(error), markup.text(reason))
            }
            Outcome::TransportFailed { status_text } => format!(
                "Gateway invocation failed with status: {}",
                markup.text(status_text)
            ),
        }
    }
}

trait Markup {
    fn label(&self, label: &str) -> String;
    fn text(&self, value: &str) -> String;
    fn line_break(&self) -> &'static str;
}

struct Plain;

impl Markup for Plain {
    fn label(&self, label: &str) -> String {
        label.to_string()
    }
    fn text(&self, value: &str) -> String {
        value.to_string()
    }
    fn line_break(&self) -> &'static str {
        "\n"
    }
}

struct Html;

impl Markup for Html {
    fn label(&self, label: &str) -> String {
        format!("<strong>{}</strong>", label)
    }
    fn text(&self, value: &str) -> String {
        escape_html(value)
    }
    fn line_break(&self) -> &'static str {
        "<br/>"
    }
}

/// Escape text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(code: u16, message: &str, body: &str) -> Outcome {
        Outcome::from_response(InvocationResponse::succeeded(code, message, body))
    }

    #[test]
    fn test_ok_response_is_success() {
        let outcome = completed(200, "OK", "hello");
        assert_eq!(outcome.style(), Style::Success);
        assert!(outcome.message().contains("Status: 200 OK"));
        assert!(outcome.message().contains("hello"));

        let html = outcome.to_html();
        assert!(html.starts_with("<p class='bg-success result'>"));
        assert!(html.contains("<strong>Status:</strong> 200 OK"));
        assert!(html.ends_with("<strong>Content:</strong><br/>hello</p>"));
    }

    #[test]
    fn test_client_error_is_warning() {
        let outcome = completed(404, "Not Found", "x");
        assert_eq!(outcome.style(), Style::Warning);
        assert!(outcome.to_html().starts_with("<p class='bg-warning result'>"));
    }

    #[test]
    fn test_399_and_400_boundary() {
        assert_eq!(completed(399, "", "").style(), Style::Success);
        assert_eq!(completed(400, "Bad Request", "").style(), Style::Warning);
    }

    #[test]
    fn test_missing_status_code_is_warning() {
        let response = InvocationResponse {
            success: true,
            ..Default::default()
        };
        assert_eq!(Outcome::from_response(response).style(), Style::Warning);
    }

    #[test]
    fn test_rejected_response_is_danger() {
        let outcome =
            Outcome::from_response(InvocationResponse::failed("BadRequest", "missing field"));
        assert_eq!(outcome.style(), Style::Danger);
        assert_eq!(outcome.message(), "BadRequest: missing field");
        assert_eq!(
            outcome.to_html(),
            "<p class='bg-danger result'>BadRequest: missing field</p>"
        );
    }

    #[test]
    fn test_transport_failure_message() {
        let outcome = Outcome::from_transport_error(&TransportError::Timeout);
        assert_eq!(outcome.style(), Style::Danger);
        assert_eq!(
            outcome.message(),
            "Gateway invocation failed with status: timeout"
        );
    }

    #[test]
    fn test_headers_are_listed_by_name() {
        let mut headers = BTreeMap::new();
        headers.insert("x-b".to_string(), "2".to_string());
        headers.insert("content-type".to_string(), "text/plain".to_string());
        let response = InvocationResponse::succeeded(200, "OK", "hi").with_headers(headers);

        let message = Outcome::from_response(response).message();
        assert_eq!(
            message,
            "Status: 200 OK\nHeaders:\ncontent-type: text/plain\nx-b: 2\n\nContent:\nhi"
        );
    }

    #[test]
    fn test_response_values_are_escaped() {
        let outcome = Outcome::from_response(InvocationResponse::failed(
            "<script>alert(1)</script>",
            "a & 'b'",
        ));
        let html = outcome.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;: a &amp; &#39;b&#39;"));
    }

    #[test]
    fn test_escape_html_passthrough() {
        assert_eq!(escape_html("plain text 123"), "plain text 123");
        assert_eq!(escape_html("\"q\""), "&quot;q&quot;");
    }
}
