//! Request/response logging interceptor.

use bytes::Bytes;
use tracing::{debug, info, warn};

use gantry_core::{Request, Response, Result};

use super::{InterceptFuture, RequestInterceptor, ResponseInterceptor};

/// Logs every request and response through `tracing`.
///
/// Register it in both chains: as a request interceptor it logs the outgoing
/// request, as a response interceptor it logs the status next to the method
/// and URL that were actually sent.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use gantry::{ClientConfig, interceptor::LogInterceptor};
///
/// let logger = Arc::new(LogInterceptor::new());
/// let config = ClientConfig::builder()
///     .request_interceptor_arc(logger.clone())
///     .response_interceptor_arc(logger)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LogInterceptor {
    headers: bool,
}

impl LogInterceptor {
    /// Create a logging interceptor with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Also log request headers (at debug level).
    #[must_use]
    pub const fn with_headers() -> Self {
        Self { headers: true }
    }
}

impl RequestInterceptor for LogInterceptor {
    fn intercept<'a>(
        &'a self,
        request: Request,
        operation: &'a str,
    ) -> InterceptFuture<'a, Request> {
        if self.headers {
            debug!(
                operation,
                method = %request.method(),
                url = %request.url(),
                headers = ?request.headers(),
                "sending request"
            );
        } else {
            info!(
                operation,
                method = %request.method(),
                url = %request.url(),
                "sending request"
            );
        }
        Box::pin(std::future::ready(Ok(request)))
    }
}

impl ResponseInterceptor for LogInterceptor {
    fn intercept<'a>(
        &'a self,
        sent: &'a Request,
        response: Response<Bytes>,
        operation: &'a str,
    ) -> InterceptFuture<'a, Response<Bytes>> {
        let status = response.status();
        if response.is_success() {
            info!(
                operation,
                method = %sent.method(),
                url = %sent.url(),
                status,
                "response received"
            );
        } else {
            warn!(
                operation,
                method = %sent.method(),
                url = %sent.url(),
                status,
                "response received with error status"
            );
        }
        Box::pin(std::future::ready(Ok(response)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use gantry_core::Method;

    #[tokio::test]
    async fn logging_passes_request_and_response_through() {
        let url = url::Url::parse("https://api.example.com/instances").expect("url");
        let request = Request::builder(Method::GET, url)
            .header("Accept", "application/json")
            .build();

        let logger = LogInterceptor::with_headers();
        let request = RequestInterceptor::intercept(&logger, request, "ListInstances")
            .await
            .expect("request");
        assert_eq!(request.header("Accept"), Some("application/json"));

        let response = Response::new(503, HashMap::new(), Bytes::new());
        let response = ResponseInterceptor::intercept(&logger, &request, response, "ListInstances")
            .await
            .expect("response");
        assert_eq!(response.status(), 503);
    }
}
