//! Request/response interceptors and the error hook.
//!
//! Interceptors are the extension seam of the invoker: caller-supplied
//! functions invoked around the request/response lifecycle to observe or
//! mutate it. Both chains run strictly in registration order on a single
//! logical task — each interceptor's output feeds the next, so a later
//! interceptor may depend on an earlier one's effects. Request interceptors
//! receive the in-flight request; response interceptors additionally receive
//! the snapshot of the request exactly as it was sent.
//!
//! # Example
//!
//! ```ignore
//! use gantry::{ClientConfig, interceptor::request_fn};
//!
//! let config = ClientConfig::builder()
//!     .request_interceptor(request_fn(|mut request, _operation| {
//!         request.insert_header("opc-request-id", new_request_id());
//!         Ok(request)
//!     }))
//!     .build();
//! ```

mod headers;
mod logging;

use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;

use gantry_core::{Error, Request, Response, Result};

pub use headers::DefaultHeaders;
pub use logging::LogInterceptor;

/// Boxed future returned by interceptor calls.
pub type InterceptFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

/// Caller-supplied hook invoked around an outgoing request.
///
/// Runs after the request is built and before it is sent; returns the
/// (possibly modified) request handed to the next interceptor or, for the
/// last one, to the transport.
pub trait RequestInterceptor: Send + Sync {
    /// Observe or mutate the request for the named operation.
    fn intercept<'a>(&'a self, request: Request, operation: &'a str)
    -> InterceptFuture<'a, Request>;
}

/// Caller-supplied hook invoked around an incoming response.
///
/// `sent` is the request exactly as it went over the wire — intercepted
/// once, snapshotted, never re-intercepted.
pub trait ResponseInterceptor: Send + Sync {
    /// Observe or mutate the response for the named operation.
    fn intercept<'a>(
        &'a self,
        sent: &'a Request,
        response: Response<Bytes>,
        operation: &'a str,
    ) -> InterceptFuture<'a, Response<Bytes>>;
}

/// Side-channel observer for failures.
///
/// Invoked exactly once per failed invocation, before the error propagates
/// to the caller. Never a recovery mechanism: propagation is unconditional.
pub trait ErrorHook: Send + Sync {
    /// Observe a failure of the named operation.
    fn on_error(&self, operation: &str, error: &Error);
}

/// Default error hook: logs the failure through `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceErrorHook;

impl ErrorHook for TraceErrorHook {
    fn on_error(&self, operation: &str, error: &Error) {
        tracing::warn!(operation, error = %error, "operation failed");
    }
}

// Closure adapters. Synchronous closures cover most interceptors; async
// work needs a trait implementation returning a real future.

/// Adapter returned by [`request_fn`].
#[derive(Debug, Clone, Copy)]
pub struct RequestFn<F>(F);

/// Wrap a synchronous closure as a [`RequestInterceptor`].
pub fn request_fn<F>(f: F) -> RequestFn<F>
where
    F: Fn(Request, &str) -> Result<Request> + Send + Sync,
{
    RequestFn(f)
}

impl<F> RequestInterceptor for RequestFn<F>
where
    F: Fn(Request, &str) -> Result<Request> + Send + Sync,
{
    fn intercept<'a>(
        &'a self,
        request: Request,
        operation: &'a str,
    ) -> InterceptFuture<'a, Request> {
        Box::pin(std::future::ready((self.0)(request, operation)))
    }
}

/// Adapter returned by [`response_fn`].
#[derive(Debug, Clone, Copy)]
pub struct ResponseFn<F>(F);

/// Wrap a synchronous closure as a [`ResponseInterceptor`].
pub fn response_fn<F>(f: F) -> ResponseFn<F>
where
    F: Fn(&Request, Response<Bytes>, &str) -> Result<Response<Bytes>> + Send + Sync,
{
    ResponseFn(f)
}

impl<F> ResponseInterceptor for ResponseFn<F>
where
    F: Fn(&Request, Response<Bytes>, &str) -> Result<Response<Bytes>> + Send + Sync,
{
    fn intercept<'a>(
        &'a self,
        sent: &'a Request,
        response: Response<Bytes>,
        operation: &'a str,
    ) -> InterceptFuture<'a, Response<Bytes>> {
        Box::pin(std::future::ready((self.0)(sent, response, operation)))
    }
}

/// Adapter returned by [`error_fn`].
#[derive(Debug, Clone, Copy)]
pub struct ErrorFn<F>(F);

/// Wrap a closure as an [`ErrorHook`].
pub fn error_fn<F>(f: F) -> ErrorFn<F>
where
    F: Fn(&str, &Error) + Send + Sync,
{
    ErrorFn(f)
}

impl<F> ErrorHook for ErrorFn<F>
where
    F: Fn(&str, &Error) + Send + Sync,
{
    fn on_error(&self, operation: &str, error: &Error) {
        (self.0)(operation, error);
    }
}
