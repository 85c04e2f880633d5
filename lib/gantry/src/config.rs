//! Client configuration.

use std::sync::Arc;

use crate::interceptor::{ErrorHook, RequestInterceptor, ResponseInterceptor, TraceErrorHook};

/// Configuration for an API client: the interceptor chains and the error
/// hook.
///
/// Constructed once per client and immutable afterwards; the interceptor
/// lists keep their registration order, which is also their execution order.
#[derive(Clone, Default)]
pub struct ClientConfig {
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
    error_hook: Option<Arc<dyn ErrorHook>>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .field("custom_error_hook", &self.error_hook.is_some())
            .finish()
    }
}

impl ClientConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Request interceptors in execution order.
    #[must_use]
    pub fn request_interceptors(&self) -> &[Arc<dyn RequestInterceptor>] {
        &self.request_interceptors
    }

    /// Response interceptors in execution order.
    #[must_use]
    pub fn response_interceptors(&self) -> &[Arc<dyn ResponseInterceptor>] {
        &self.response_interceptors
    }

    /// The configured error hook, or the tracing-backed default.
    #[must_use]
    pub fn error_hook(&self) -> Arc<dyn ErrorHook> {
        self.error_hook
            .clone()
            .unwrap_or_else(|| Arc::new(TraceErrorHook))
    }
}

/// Builder for [`ClientConfig`].
#[derive(Clone, Default)]
pub struct ClientConfigBuilder {
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
    error_hook: Option<Arc<dyn ErrorHook>>,
}

impl std::fmt::Debug for ClientConfigBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfigBuilder")
            .field("request_interceptors", &self.request_interceptors.len())
            .field("response_interceptors", &self.response_interceptors.len())
            .field("custom_error_hook", &self.error_hook.is_some())
            .finish()
    }
}

impl ClientConfigBuilder {
    /// Append a request interceptor; interceptors run in registration order.
    #[must_use]
    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Append an already-shared request interceptor.
    #[must_use]
    pub fn request_interceptor_arc(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Append a response interceptor; interceptors run in registration order.
    #[must_use]
    pub fn response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    /// Append an already-shared response interceptor.
    #[must_use]
    pub fn response_interceptor_arc(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Replace the default error hook.
    #[must_use]
    pub fn error_hook(mut self, hook: impl ErrorHook + 'static) -> Self {
        self.error_hook = Some(Arc::new(hook));
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> ClientConfig {
        ClientConfig {
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
            error_hook: self.error_hook,
        }
    }
}
