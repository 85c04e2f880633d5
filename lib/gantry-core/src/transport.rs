//! Transport abstraction.

use std::future::Future;

use bytes::Bytes;

use crate::{Request, Response, Result};

/// The function that actually sends a request over the wire.
///
/// The invoker is transport-agnostic: it builds and intercepts requests, then
/// hands the final [`Request`] to whatever implementation it was constructed
/// with. The `gantry` crate ships a hyper-based default; tests typically
/// supply an in-process implementation.
///
/// Cancellation and timeouts live at this level, not in the invoker.
pub trait Transport: Send + Sync {
    /// Send a request and resolve to its response.
    ///
    /// # Errors
    ///
    /// Returns an error for transport-level failures: connection errors,
    /// TLS errors, timeouts.
    fn send(&self, request: Request) -> impl Future<Output = Result<Response<Bytes>>> + Send;
}
