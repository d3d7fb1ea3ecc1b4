//! Typed request dispatcher for the SafeCharge REST payment API.
//!
//! Callers build a request value from [`proto::request`], hand it to a
//! [`Dispatcher`], and get back the response type registered for that
//! request's kind. The endpoint URL, serialization, headers and reply
//! decoding are all decided by the request type.
//!
//! # Modules
//!
//! - [`constants`] — Well-known hosts, fixed headers, defaults
//! - [`error`] — Transport, dispatch and configuration errors
//! - [`transport`] — The [`Transport`] seam and the reqwest-backed [`HttpTransport`]
//! - [`lifecycle`] — The once-only [`TransportGuard`]
//! - [`dispatcher`] — The [`Dispatcher`] pipeline
//! - [`config`] — TOML configuration with environment expansion
//!
//! # Process-wide client
//!
//! [`dispatch`] and [`execute`] go through [`lifecycle::global()`]. Call
//! [`init`] once at startup to install a custom transport; otherwise the
//! default [`HttpTransport`] is installed on first use. Requests dispatched
//! this way must carry their own server host.
//!
//! # Feature Flags
//!
//! - `telemetry` — `tracing` spans and debug events for sent and received
//!   payloads

pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error;
pub mod lifecycle;
pub mod transport;

use std::sync::Arc;

pub use safecharge_proto as proto;

pub use config::SafechargeConfig;
pub use constants::{INTEGRATION_HOST, PRODUCTION_HOST};
pub use dispatcher::Dispatcher;
pub use error::{ConfigError, DispatchError, TransportError};
pub use lifecycle::TransportGuard;
pub use proto::{ApiRequest, ApiResponse, RequestKind, ResponseKind};
pub use transport::{HttpTransport, HttpTransportConfig, Transport};

/// Installs `transport` as the process-wide transport.
///
/// Returns `false`, leaving the existing one in place, if a transport was
/// already installed.
pub fn init(transport: Arc<dyn Transport>) -> bool {
    lifecycle::global().init(transport)
}

/// Sends `request` through the process-wide transport.
///
/// # Errors
///
/// See [`Dispatcher::execute`].
pub fn execute<R: ApiRequest>(request: R) -> Result<R::Response, DispatchError> {
    Dispatcher::lazy().execute(request)
}

/// Sends `request` through the process-wide transport, reporting transport
/// failures and empty replies as `Ok(None)`.
///
/// # Errors
///
/// See [`Dispatcher::dispatch`].
pub fn dispatch<R: ApiRequest>(request: R) -> Result<Option<R::Response>, DispatchError> {
    Dispatcher::lazy().dispatch(request)
}
