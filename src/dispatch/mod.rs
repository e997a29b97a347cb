// ABOUTME: Shared request-dispatch abstraction for the panel API.
// ABOUTME: Defines the Dispatcher trait plus request, reply, and error types.

mod error;
mod http;
mod reply;
mod request;

pub use error::DispatchError;
pub use http::HttpDispatcher;
pub use reply::Reply;
pub use request::{Body, FORM_CONTENT_TYPE, Method, Request};

use async_trait::async_trait;
use std::sync::Arc;

/// Issues one request and returns the backend's reply.
///
/// Implementations own every transport concern (connections, timeouts,
/// status handling). Callers get exactly one attempt per call.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: Request) -> Result<Reply, DispatchError>;
}

#[async_trait]
impl<D: Dispatcher + ?Sized> Dispatcher for &D {
    async fn dispatch(&self, request: Request) -> Result<Reply, DispatchError> {
        (**self).dispatch(request).await
    }
}

#[async_trait]
impl<D: Dispatcher + ?Sized> Dispatcher for Arc<D> {
    async fn dispatch(&self, request: Request) -> Result<Reply, DispatchError> {
        (**self).dispatch(request).await
    }
}

#[async_trait]
impl<D: Dispatcher + ?Sized> Dispatcher for Box<D> {
    async fn dispatch(&self, request: Request) -> Result<Reply, DispatchError> {
        (**self).dispatch(request).await
    }
}
