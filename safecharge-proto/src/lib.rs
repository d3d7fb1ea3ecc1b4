//! Wire format types for the SafeCharge REST API.
//!
//! This crate defines the request and response bodies exchanged with the
//! API, and the endpoint table that ties each operation to its URL path and
//! reply shape. It has minimal dependencies (`serde`, `serde_json`,
//! `thiserror`) and performs no I/O; sending requests is the job of the
//! `safecharge` crate.
//!
//! # Modules
//!
//! - [`kind`] — [`RequestKind`], [`ResponseKind`] and the [`ENDPOINTS`] table
//! - [`common`] — Field groups shared across operations
//! - [`request`] — One request type per operation
//! - [`response`] — One response type per reply shape
//!
//! # Typing
//!
//! Every request type implements [`ApiRequest`], which names its
//! [`RequestKind`] and its response type at compile time. The response type's
//! [`ApiResponse::KIND`] always equals `R::KIND.response_kind()`, so the reply
//! shape is decided by the request, never by the reply body.

pub mod common;
pub mod kind;
pub mod request;
pub mod response;

pub use common::{RequestBase, ResponseBase, Status, TransactionStatus};
pub use kind::{ENDPOINTS, Endpoint, RequestKind, ResponseKind, UnknownRequestKind};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A request body for one SafeCharge API operation.
pub trait ApiRequest: Serialize {
    /// The operation this request invokes.
    const KIND: RequestKind;

    /// The reply type registered for [`Self::KIND`].
    type Response: ApiResponse;

    /// Shared merchant fields.
    fn base(&self) -> &RequestBase;

    /// Mutable access to the shared merchant fields.
    fn base_mut(&mut self) -> &mut RequestBase;

    /// The server host this request targets, if set.
    fn server_host(&self) -> Option<&str> {
        self.base().server_host.as_deref()
    }

    /// Sets the server host this request targets.
    fn set_server_host(&mut self, host: impl Into<String>)
    where
        Self: Sized,
    {
        self.base_mut().server_host = Some(host.into());
    }

    /// Removes and returns the server host, leaving the field empty.
    fn take_server_host(&mut self) -> Option<String> {
        self.base_mut().server_host.take()
    }
}

/// A reply body for one SafeCharge API response kind.
pub trait ApiResponse: DeserializeOwned + Serialize {
    /// The reply shape this type decodes.
    const KIND: ResponseKind;

    /// Shared status fields.
    fn base(&self) -> &ResponseBase;
}
