//! Default-header stamping interceptor.

use gantry_core::{Request, Result};

use super::{InterceptFuture, RequestInterceptor};

/// Inserts a fixed set of headers on every request, without overriding
/// headers the operation already declared.
///
/// # Example
///
/// ```ignore
/// use gantry::{ClientConfig, interceptor::DefaultHeaders};
///
/// let config = ClientConfig::builder()
///     .request_interceptor(
///         DefaultHeaders::new()
///             .header("Accept", "application/json")
///             .header("x-client-info", "gantry/0.1"),
///     )
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultHeaders {
    headers: Vec<(String, String)>,
}

impl DefaultHeaders {
    /// Create an empty header set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header to stamp on every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl RequestInterceptor for DefaultHeaders {
    fn intercept<'a>(
        &'a self,
        mut request: Request,
        _operation: &'a str,
    ) -> InterceptFuture<'a, Request> {
        for (name, value) in &self.headers {
            if request.header(name).is_none() {
                request.insert_header(name.clone(), value.clone());
            }
        }
        Box::pin(std::future::ready(Ok(request)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::Method;

    #[tokio::test]
    async fn stamps_missing_headers_only() {
        let url = url::Url::parse("https://api.example.com/").expect("url");
        let request = Request::builder(Method::GET, url)
            .header("Accept", "text/plain")
            .build();

        let interceptor = DefaultHeaders::new()
            .header("Accept", "application/json")
            .header("x-client-info", "gantry/0.1");

        let request = interceptor
            .intercept(request, "ListInstances")
            .await
            .expect("intercepted");

        assert_eq!(request.header("Accept"), Some("text/plain"));
        assert_eq!(request.header("x-client-info"), Some("gantry/0.1"));
    }
}
