//! The request pipeline.
//!
//! Every request goes through [`Dispatcher::execute`]: resolve the endpoint
//! from the request's kind, resolve the host, serialize, send through the
//! transport, and decode the reply into the type registered for that kind.
//! [`Dispatcher::dispatch`] wraps it with the absent-response contract, where
//! transport failures and empty replies become `Ok(None)`.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use safecharge::{Dispatcher, HttpTransport, INTEGRATION_HOST};
//! use safecharge::proto::request::GetSessionTokenRequest;
//! use safecharge::proto::RequestBase;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new(Arc::new(HttpTransport::try_default()?))
//!     .with_default_host(INTEGRATION_HOST);
//!
//! let request = GetSessionTokenRequest {
//!     base: RequestBase::new("merchant", "site"),
//! };
//! let reply = dispatcher.execute(request)?;
//! println!("{:?}", reply.base.session_token);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use safecharge_proto::{ApiRequest, RequestKind};
use serde_json::Value;

use crate::constants::REQUEST_HEADERS;
use crate::error::{DispatchError, TransportError};
use crate::lifecycle::{self, TransportGuard};
use crate::transport::Transport;

/// JSON key a dynamically-typed body may use to carry its target host.
const SERVER_HOST_KEY: &str = "serverHost";

/// Where a [`Dispatcher`] gets its transport from.
#[derive(Clone, Debug)]
enum TransportSource {
    /// A transport owned by this dispatcher and its clones.
    Fixed(Arc<dyn Transport>),
    /// A guard that installs the default HTTP transport on first use.
    Lazy(&'static TransportGuard),
}

/// Sends typed requests and decodes their registered replies.
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    transport: TransportSource,
    default_host: Option<String>,
}

impl Dispatcher {
    /// Creates a dispatcher over an explicit transport.
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: TransportSource::Fixed(transport),
            default_host: None,
        }
    }

    /// Creates a dispatcher over the process-wide guard.
    ///
    /// The default HTTP transport is installed on first dispatch unless
    /// the application called [`TransportGuard::init`] first.
    #[must_use]
    pub fn lazy() -> Self {
        Self::with_guard(lifecycle::global())
    }

    /// Creates a dispatcher over `guard`.
    #[must_use]
    pub const fn with_guard(guard: &'static TransportGuard) -> Self {
        Self {
            transport: TransportSource::Lazy(guard),
            default_host: None,
        }
    }

    /// Sets the host used when a request does not name one.
    #[must_use]
    pub fn with_default_host(mut self, host: impl Into<String>) -> Self {
        self.default_host = Some(host.into());
        self
    }

    /// Returns the fallback host, if any.
    #[must_use]
    pub fn default_host(&self) -> Option<&str> {
        self.default_host.as_deref()
    }

    /// Returns the transport, installing the default one if needed.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Build`] if a lazy default transport cannot be
    /// built.
    pub fn transport(&self) -> Result<Arc<dyn Transport>, TransportError> {
        match &self.transport {
            TransportSource::Fixed(transport) => Ok(Arc::clone(transport)),
            TransportSource::Lazy(guard) => guard.get_or_init_default(),
        }
    }

    /// Sends `request` and decodes the reply as `R::Response`.
    ///
    /// The request's server host is consumed here and never serialized.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::MissingHost`] if neither the request nor the
    ///   dispatcher names a host
    /// - [`DispatchError::Transport`] if the request could not be delivered
    /// - [`DispatchError::EmptyResponse`] if the reply body is empty or a
    ///   bare JSON `null`
    /// - [`DispatchError::Deserialize`] if the reply does not match
    ///   `R::Response`
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "safecharge.execute", skip_all, fields(kind = %R::KIND), err)
    )]
    pub fn execute<R: ApiRequest>(&self, mut request: R) -> Result<R::Response, DispatchError> {
        let kind = R::KIND;
        let transport = self.transport()?;
        let url = self.resolve_url(kind, request.take_server_host())?;
        let body = serde_json::to_string(&request)
            .map_err(|source| DispatchError::Serialize { kind, source })?;

        let raw = send(transport.as_ref(), kind, &body, &url)?;
        serde_json::from_str(&raw).map_err(|source| DispatchError::Deserialize {
            kind: kind.response_kind(),
            source,
        })
    }

    /// Sends `request`, reporting transport failures and empty replies as
    /// `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Every [`DispatchError`] other than those two, most notably
    /// [`DispatchError::Deserialize`].
    pub fn dispatch<R: ApiRequest>(
        &self,
        request: R,
    ) -> Result<Option<R::Response>, DispatchError> {
        absent_as_none(self.execute(request))
    }

    /// Sends an untyped JSON body as `kind` and returns the reply normalized
    /// through the registered response type.
    ///
    /// A top-level `serverHost` string in `body` is used as the target host
    /// and removed before sending.
    ///
    /// # Errors
    ///
    /// As [`Dispatcher::execute`], plus [`DispatchError::NotAnObject`] if
    /// `body` is not a JSON object.
    #[cfg_attr(
        feature = "telemetry",
        tracing::instrument(name = "safecharge.execute_json", skip_all, fields(kind = %kind), err)
    )]
    pub fn execute_json(&self, kind: RequestKind, mut body: Value) -> Result<Value, DispatchError> {
        let Value::Object(fields) = &mut body else {
            return Err(DispatchError::NotAnObject { kind });
        };
        let host = match fields.remove(SERVER_HOST_KEY) {
            Some(Value::String(host)) => Some(host),
            _ => None,
        };

        let transport = self.transport()?;
        let url = self.resolve_url(kind, host)?;
        let body = serde_json::to_string(&body)
            .map_err(|source| DispatchError::Serialize { kind, source })?;

        let raw = send(transport.as_ref(), kind, &body, &url)?;
        let response = kind.response_kind();
        response
            .decode(&raw)
            .map_err(|source| DispatchError::Deserialize {
                kind: response,
                source,
            })
    }

    /// [`Dispatcher::execute_json`] under the absent-response contract.
    ///
    /// # Errors
    ///
    /// As [`Dispatcher::dispatch`].
    pub fn dispatch_json(
        &self,
        kind: RequestKind,
        body: Value,
    ) -> Result<Option<Value>, DispatchError> {
        absent_as_none(self.execute_json(kind, body))
    }

    fn resolve_url(
        &self,
        kind: RequestKind,
        host: Option<String>,
    ) -> Result<String, DispatchError> {
        let host = host
            .filter(|h| !h.is_empty())
            .or_else(|| self.default_host.clone())
            .filter(|h| !h.is_empty())
            .ok_or(DispatchError::MissingHost { kind })?;
        Ok(join_url(&host, kind.path()))
    }
}

/// Sends `body` and rejects an empty or `null` reply.
fn send(
    transport: &dyn Transport,
    kind: RequestKind,
    body: &str,
    url: &str,
) -> Result<String, DispatchError> {
    #[cfg(feature = "telemetry")]
    tracing::debug!("{kind} sent {body}");

    let raw = transport.send(body, url, &REQUEST_HEADERS)?;

    #[cfg(feature = "telemetry")]
    tracing::debug!("{} received {raw}", kind.response_kind());

    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(DispatchError::EmptyResponse {
            kind: kind.response_kind(),
        });
    }
    Ok(raw)
}

fn absent_as_none<T>(result: Result<T, DispatchError>) -> Result<Option<T>, DispatchError> {
    match result {
        Ok(response) => Ok(Some(response)),
        Err(err) if err.is_absent_response() => {
            #[cfg(feature = "telemetry")]
            tracing::debug!(error = %err, "no response");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Joins `host` and `path` with exactly one `/` between them.
fn join_url(host: &str, path: &str) -> String {
    format!(
        "{}/{}",
        host.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
