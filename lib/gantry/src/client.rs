//! The shared invocation routine behind generated API clients.
//!
//! [`ApiClient`] owns a transport, an endpoint, and an immutable
//! [`ClientConfig`]. Generated per-service clients build one
//! [`Operation`] per call and delegate to [`ApiClient::send`] or
//! [`ApiClient::send_json`], so interceptor and error handling logic exists
//! exactly once instead of per operation.

use std::collections::HashMap;
use std::future::Future;
use std::time::Instant;

use bytes::Bytes;
use tracing::{Instrument, Level, info, span, warn};
use url::Url;

use gantry_core::{
    Decoded, Error, Operation, QueryParam, Request, Response, Result, Transport, from_json,
};

use crate::config::ClientConfig;

/// Shared API client: transport + endpoint + interceptor configuration.
///
/// # Example
///
/// ```ignore
/// use gantry::{ApiClient, HyperTransport, Method, Operation, QueryParam};
///
/// let client = ApiClient::new(HyperTransport::new(), "https://iaas.us-1.example.com/20160918")?;
///
/// let op = Operation::builder("ListInstances", Method::GET, "/instances")
///     .query(QueryParam::single("compartmentId", compartment_id))
///     .build();
/// let listing: Decoded<Vec<Instance>> = client.send_json(op).await?;
/// ```
#[derive(Debug)]
pub struct ApiClient<T> {
    transport: T,
    endpoint: Url,
    config: ClientConfig,
}

impl<T: Clone> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            endpoint: self.endpoint.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T> ApiClient<T> {
    /// Create a client with the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be parsed as a URL.
    pub fn new(transport: T, endpoint: impl AsRef<str>) -> Result<Self> {
        Self::with_config(transport, endpoint, ClientConfig::default())
    }

    /// Create a client with interceptors and an error hook.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint cannot be parsed as a URL.
    pub fn with_config(
        transport: T,
        endpoint: impl AsRef<str>,
        config: ClientConfig,
    ) -> Result<Self> {
        Ok(Self {
            transport,
            endpoint: Url::parse(endpoint.as_ref()).map_err(Error::InvalidUrl)?,
            config,
        })
    }

    /// Create a client from a pre-parsed endpoint URL.
    #[must_use]
    pub const fn with_url(transport: T, endpoint: Url, config: ClientConfig) -> Self {
        Self {
            transport,
            endpoint,
            config,
        }
    }

    /// The API root all operation paths are resolved against.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get a reference to the transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate that every required parameter was supplied, before building
    /// any request.
    ///
    /// Failures go through the error hook like every other error kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingParameter`] naming the first missing
    /// parameter and the operation.
    pub fn check_required(
        &self,
        operation: &str,
        required: &[&str],
        params: &HashMap<&str, Option<String>>,
    ) -> Result<()> {
        gantry_core::check_required(operation, required, params)
            .inspect_err(|err| self.config.error_hook().on_error(operation, err))
    }

    /// Build the wire-level request for an operation: resolve the URL,
    /// render query parameters, encode the body, apply declared headers.
    fn build_request(&self, operation: Operation) -> Result<Request> {
        let (_name, method, path, headers, query, body, extensions) = operation.into_parts();

        let mut url = Url::parse(&format!(
            "{}{path}",
            self.endpoint.as_str().trim_end_matches('/')
        ))?;

        let pairs: Vec<(String, String)> = query.iter().flat_map(QueryParam::pairs).collect();
        if !pairs.is_empty() {
            let mut serializer = url.query_pairs_mut();
            for (name, value) in &pairs {
                serializer.append_pair(name, value);
            }
        }

        let mut builder = Request::builder(method, url);

        // Body first, so a declared Content-Type header can override the
        // encoder's choice below.
        if let Some(body) = body {
            let (content_type, bytes) = body.encode()?;
            builder = builder.header("Content-Type", content_type).body(bytes);
        }

        let mut request = builder.build();
        for (name, value) in headers {
            match value {
                Some(value) if !value.is_empty() => request.insert_header(name, value),
                _ => {}
            }
        }
        *request.extensions_mut() = extensions;

        Ok(request)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Send an operation and yield the bare response.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Http`] carrying the response when the status is
    /// outside `[200, 300)`, or with the transport/interceptor error.
    pub async fn send(&self, operation: Operation) -> Result<Response<Bytes>> {
        let name = operation.name().to_string();
        self.hooked(&name, self.dispatch(operation)).await
    }

    /// Send an operation and decode the response body as JSON.
    ///
    /// Yields the raw response next to the decoded payload.
    ///
    /// # Errors
    ///
    /// Fails like [`ApiClient::send`], or with a deserialization error when
    /// the body of a successful response does not match `D`.
    pub async fn send_json<D: serde::de::DeserializeOwned>(
        &self,
        operation: Operation,
    ) -> Result<Decoded<D>> {
        let name = operation.name().to_string();
        self.hooked(&name, async {
            let response = self.dispatch(operation).await?;
            let data = from_json(response.body())?;
            Ok(Decoded { response, data })
        })
        .await
    }

    /// Run a fallible invocation, routing any failure through the error hook
    /// exactly once before propagating it.
    async fn hooked<V>(&self, operation: &str, fut: impl Future<Output = Result<V>>) -> Result<V> {
        match fut.await {
            Ok(value) => Ok(value),
            Err(err) => {
                self.config.error_hook().on_error(operation, &err);
                Err(err)
            }
        }
    }

    /// The single dispatch pipeline: build, intercept, send, intercept,
    /// check status.
    async fn dispatch(&self, operation: Operation) -> Result<Response<Bytes>> {
        let name = operation.name().to_string();
        let mut request = self.build_request(operation)?;

        for interceptor in self.config.request_interceptors() {
            request = interceptor.intercept(request, &name).await?;
        }

        // Structural copy of the final request, so response interceptors
        // observe exactly what went over the wire.
        let sent = request.clone();

        let span = span!(
            Level::INFO,
            "api_request",
            operation = %name,
            method = %sent.method(),
            url = %sent.url(),
        );

        async {
            let start = Instant::now();
            let result = self.transport.send(request).await;
            let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

            let mut response = match result {
                Ok(response) => response,
                Err(err) => {
                    warn!(error = %err, elapsed_ms, "request failed");
                    return Err(err);
                }
            };

            for interceptor in self.config.response_interceptors() {
                response = interceptor.intercept(&sent, response, &name).await?;
            }

            let status = response.status();
            if response.is_success() {
                info!(status, elapsed_ms, "request completed");
                Ok(response)
            } else {
                warn!(status, elapsed_ms, "request failed with HTTP error");
                Err(Error::http(response))
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_core::{Body, CollectionFormat, Method};

    // Endpoint resolution and request building are exercised without a
    // transport; the full pipeline is covered by the integration tests.

    fn client() -> ApiClient<()> {
        ApiClient::new((), "https://iaas.us-1.example.com/20160918").expect("endpoint")
    }

    #[test]
    fn build_request_joins_endpoint_and_path() {
        let op = Operation::builder("ListInstances", Method::GET, "/instances").build();
        let request = client().build_request(op).expect("request");
        assert_eq!(
            request.url().as_str(),
            "https://iaas.us-1.example.com/20160918/instances"
        );
    }

    #[test]
    fn build_request_renders_multi_query() {
        let op = Operation::builder("ListInstances", Method::GET, "/instances")
            .query(QueryParam::repeated(
                "lifecycleState",
                ["RUNNING", "STOPPED"],
                CollectionFormat::Multi,
            ))
            .build();

        let request = client().build_request(op).expect("request");
        let pairs: Vec<(String, String)> = request
            .url()
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("lifecycleState".to_string(), "RUNNING".to_string()),
                ("lifecycleState".to_string(), "STOPPED".to_string()),
            ]
        );
    }

    #[test]
    fn build_request_omits_empty_query() {
        let op = Operation::builder("ListInstances", Method::GET, "/instances")
            .query(QueryParam::optional("page", None::<&str>))
            .build();

        let request = client().build_request(op).expect("request");
        assert_eq!(request.url().query(), None);
    }

    #[test]
    fn build_request_skips_unset_headers() {
        let op = Operation::builder("GetInstance", Method::GET, "/instances/i-1")
            .header("opc-request-id", Some("req-7"))
            .header("if-match", None::<String>)
            .header("if-none-match", Some(""))
            .build();

        let request = client().build_request(op).expect("request");
        assert_eq!(request.header("opc-request-id"), Some("req-7"));
        assert_eq!(request.header("if-match"), None);
        assert_eq!(request.header("if-none-match"), None);
    }

    #[test]
    fn declared_content_type_overrides_encoder() {
        let op = Operation::builder("PutObject", Method::PUT, "/objects/o-1")
            .header("Content-Type", Some("application/yaml"))
            .body(Body::raw(None, "key: value"))
            .build();

        let request = client().build_request(op).expect("request");
        assert_eq!(request.header("Content-Type"), Some("application/yaml"));
    }
}
