//! Gateway Playground Common Types
//!
//! Shared types used by both the gateway service and the invoker.

pub mod protocol;

pub use protocol::{HttpVersion, InvocationRequest, InvocationResponse};
