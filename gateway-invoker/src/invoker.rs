//! The gateway invoker: one click, one POST, one rendered result.

use std::sync::Arc;

use gateway_common::InvocationRequest;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::Config;
use crate::event::InvokeEvent;
use crate::outcome::Outcome;
use crate::sink::OutputSink;
use crate::transport::{HttpTransport, Transport};

/// Invokes the `/gateway` endpoint and renders the outcome into a sink.
///
/// Cloning is cheap; clones share the transport and the sink. Invocations
/// are independent of each other: there is no in-flight guard, and the
/// last one to finish owns the sink content.
#[derive(Clone)]
pub struct GatewayInvoker {
    endpoint: String,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn OutputSink>,
}

impl GatewayInvoker {
    pub fn new(config: &Config, sink: Arc<dyn OutputSink>) -> Self {
        Self::with_transport(config.endpoint(), Arc::new(HttpTransport::new()), sink)
    }

    pub fn with_transport(
        endpoint: impl Into<String>,
        transport: Arc<dyn Transport>,
        sink: Arc<dyn OutputSink>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            sink,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run one invocation to completion and render it.
    pub async fn invoke(&self) -> Outcome {
        let invocation_id = Uuid::new_v4();
        let request = InvocationRequest::root();
        tracing::debug!(
            %invocation_id,
            endpoint = %self.endpoint,
            method = %request.method,
            path = %request.path,
            "Invoking gateway"
        );

        let result = self.transport.post(&self.endpoint, &request).await;
        if let Err(ref e) = result {
            tracing::warn!(%invocation_id, "Gateway invocation failed: {}", e);
        }

        let outcome = Outcome::from_result(result);
        self.sink.replace(&outcome.to_html());
        tracing::info!(%invocation_id, style = %outcome.style(), "Gateway invocation rendered");

        outcome
    }

    /// Click handler: prevents the event's default action and starts an
    /// invocation in the background.
    ///
    /// Must be called within a tokio runtime.
    pub fn on_click(&self, event: &mut InvokeEvent) -> JoinHandle<Outcome> {
        event.prevent_default();
        let invoker = self.clone();
        tokio::spawn(async move { invoker.invoke().await })
    }
}
