//! Error types for dispatching requests.

use safecharge_proto::{RequestKind, ResponseKind};

/// Errors raised while sending a serialized request over the wire.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The request could not be sent (connection refused, timeout, TLS).
    #[error("HTTP error: {context}: {source}")]
    Http {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read to the end.
    #[error("failed to read response body: {context}: {source}")]
    ResponseBodyRead {
        /// Human-readable context.
        context: &'static str,
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },

    /// I/O failure reported by a custom transport.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors produced by a dispatch.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Neither the request nor the dispatcher names a server host.
    #[error("no server host for {kind}: set one on the request or the dispatcher")]
    MissingHost {
        /// The operation being dispatched.
        kind: RequestKind,
    },

    /// The request could not be encoded as JSON.
    #[error("failed to serialize {kind} request: {source}")]
    Serialize {
        /// The operation being dispatched.
        kind: RequestKind,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A dynamically-typed request body was not a JSON object.
    #[error("{kind} request body must be a JSON object")]
    NotAnObject {
        /// The operation being dispatched.
        kind: RequestKind,
    },

    /// The transport failed to deliver the request or read the reply.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server replied with an empty body or a bare JSON `null`.
    #[error("empty {kind} reply")]
    EmptyResponse {
        /// The reply shape that was expected.
        kind: ResponseKind,
    },

    /// The reply did not match the registered response shape.
    #[error("failed to decode {kind}: {source}")]
    Deserialize {
        /// The reply shape that was expected.
        kind: ResponseKind,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl DispatchError {
    /// Returns `true` for transport-level failures.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Returns `true` for outcomes the compatibility contract reports as an
    /// absent response: transport failures and empty replies.
    #[must_use]
    pub const fn is_absent_response(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::EmptyResponse { .. })
    }
}

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::SafechargeConfig`].
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
