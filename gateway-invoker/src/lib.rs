//! Gateway Invoker - calls the `/gateway` endpoint and renders the outcome.
//!
//! The invoker sends the fixed `{"path":"/","method":"GET"}` request, maps
//! the gateway's envelope (or the transport failure) to an [`Outcome`], and
//! replaces the content of an [`OutputSink`] with the rendered fragment.

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod invoker;
pub mod outcome;
pub mod sink;
pub mod transport;

pub use config::Config;
pub use error::TransportError;
pub use event::InvokeEvent;
pub use invoker::GatewayInvoker;
pub use outcome::{Outcome, Style};
pub use sink::{MemorySink, OutputSink, WriterSink};
pub use transport::{HttpTransport, Transport};
