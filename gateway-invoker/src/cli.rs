//! Command-line surface of `gateway-invoke`.

use std::io::Write;
use std::sync::Arc;

use crate::config::Config;
use crate::invoker::GatewayInvoker;
use crate::outcome::{Outcome, Style};
use crate::sink::{MemorySink, OutputSink, WriterSink};

/// Flags understood by the binary. Unknown arguments are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// `--version` / `-V`
    pub version: bool,
    /// `--text`: print the plain message instead of the HTML fragment.
    pub text: bool,
}

impl Options {
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Options::default();
        for arg in args {
            match arg.as_ref() {
                "--version" | "-V" => options.version = true,
                "--text" => options.text = true,
                _ => {}
            }
        }
        options
    }
}

/// Perform one invocation, writing the result to `out`.
///
/// HTML mode renders through a [`WriterSink`]; text mode writes the plain
/// message once the invocation completed.
pub async fn run<W>(config: &Config, options: &Options, mut out: W) -> std::io::Result<Outcome>
where
    W: Write + Send + 'static,
{
    if options.text {
        let invoker = GatewayInvoker::new(config, Arc::new(MemorySink::new()));
        tracing::info!("Invoking {}", invoker.endpoint());
        let outcome = invoker.invoke().await;
        writeln!(out, "{}", outcome.message())?;
        out.flush()?;
        Ok(outcome)
    } else {
        let sink: Arc<dyn OutputSink> = Arc::new(WriterSink::new(out));
        let invoker = GatewayInvoker::new(config, sink);
        tracing::info!("Invoking {}", invoker.endpoint());
        Ok(invoker.invoke().await)
    }
}

/// Process exit status: 0 only for success-styled outcomes.
pub fn exit_status(outcome: &Outcome) -> u8 {
    match outcome.style() {
        Style::Success => 0,
        Style::Warning | Style::Danger => 1,
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Mutex;

    use gateway_common::InvocationResponse;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::error::TransportError;

    /// Writer whose contents stay readable after being moved into a sink.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    async fn gateway_answering(body: serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gateway"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    #[test]
    fn test_parse_options() {
        assert_eq!(Options::parse(["gateway-invoke"]), Options::default());
        assert_eq!(
            Options::parse(["gateway-invoke", "--text", "extra"]),
            Options { version: false, text: true }
        );
        assert!(Options::parse(["gateway-invoke", "-V"]).version);
        assert!(Options::parse(["gateway-invoke", "--version"]).version);
    }

    #[test]
    fn test_exit_status_is_zero_only_for_success() {
        let ok = Outcome::from_response(InvocationResponse::succeeded(200, "OK", ""));
        let not_found = Outcome::from_response(InvocationResponse::succeeded(404, "Not Found", ""));
        let rejected = Outcome::from_response(InvocationResponse::failed("e", "r"));
        let timed_out = Outcome::from_transport_error(&TransportError::Timeout);

        assert_eq!(exit_status(&ok), 0);
        assert_eq!(exit_status(&not_found), 1);
        assert_eq!(exit_status(&rejected), 1);
        assert_eq!(exit_status(&timed_out), 1);
    }

    #[tokio::test]
    async fn test_text_mode_prints_plain_message() {
        let server = gateway_answering(json!({
            "success": true,
            "status-code": 200,
            "status-message": "OK",
            "body": "<i>hello</i>"
        }))
        .await;
        let config = Config::new(server.address().to_string(), "http");
        let out = SharedBuffer::default();

        let outcome = run(&config, &Options::parse(["--text"]), out.clone())
            .await
            .unwrap();

        assert_eq!(exit_status(&outcome), 0);
        assert_eq!(
            out.contents(),
            "Status: 200 OK\nHeaders:\n\nContent:\n<i>hello</i>\n"
        );
    }

    #[tokio::test]
    async fn test_html_mode_prints_fragment() {
        let server = gateway_answering(json!({
            "success": false,
            "error": "invocation failed",
            "reason": "Connection refused"
        }))
        .await;
        let config = Config::new(server.address().to_string(), "http");
        let out = SharedBuffer::default();

        let outcome = run(&config, &Options::default(), out.clone()).await.unwrap();

        assert_eq!(exit_status(&outcome), 1);
        assert_eq!(
            out.contents(),
            "<p class='bg-danger result'>invocation failed: Connection refused</p>\n"
        );
    }
}
