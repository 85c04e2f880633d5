//! Error types for gantry.

use bytes::Bytes;
use derive_more::{Display, Error, From};

use crate::Response;

/// Main error type for gantry operations.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// HTTP-level failure: status outside `[200, 300)`.
    ///
    /// The response itself is the error value, so callers can inspect the
    /// status, headers, and body. No body decoding is attempted on this path.
    #[display("HTTP error {}", response.status())]
    #[from(skip)]
    Http {
        /// The full response that signalled the failure.
        #[error(not(source))]
        response: Response<Bytes>,
    },

    /// A required operation parameter was not supplied.
    #[display("missing required parameter '{parameter}' for operation '{operation}'")]
    #[from(skip)]
    MissingParameter {
        /// Operation name.
        operation: String,
        /// Name of the first missing parameter.
        parameter: String,
    },

    /// Network/connection errors.
    #[display("connection error: {_0}")]
    #[from(skip)]
    Connection(#[error(not(source))] String),

    /// TLS/SSL errors.
    #[display("TLS error: {_0}")]
    #[from(skip)]
    Tls(#[error(not(source))] String),

    /// Request timeout at the transport level.
    #[display("request timeout")]
    #[from(skip)]
    Timeout,

    /// Invalid request construction.
    #[display("invalid request: {_0}")]
    #[from(skip)]
    InvalidRequest(#[error(not(source))] String),

    /// JSON serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// JSON deserialization error with path context.
    #[display("JSON deserialization error at '{path}': {message}")]
    #[from(skip)]
    JsonDeserialization {
        /// JSON path to the error (e.g., "instance.shape.ocpus").
        path: String,
        /// Error message.
        message: String,
    },

    /// Form URL-encoded serialization error.
    #[display("form serialization error: {_0}")]
    #[from]
    FormSerialization(serde_urlencoded::ser::Error),

    /// URL parsing error.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an HTTP error from a failed response.
    #[must_use]
    pub const fn http(response: Response<Bytes>) -> Self {
        Self::Http { response }
    }

    /// Create a missing-parameter validation error.
    #[must_use]
    pub fn missing_parameter(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self::MissingParameter {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Create a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }

    /// Create a TLS error.
    #[must_use]
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Create a JSON deserialization error with path context.
    #[must_use]
    pub fn json_deserialization(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonDeserialization {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// Returns `true` if this is a connection error.
    #[must_use]
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection(_))
    }

    /// Returns the HTTP status code if this is an HTTP error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { response } => Some(response.status()),
            _ => None,
        }
    }

    /// Returns `true` if this is a client error (4xx).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is a server error (5xx).
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns the failed response if this is an HTTP error.
    #[must_use]
    pub const fn response(&self) -> Option<&Response<Bytes>> {
        match self {
            Self::Http { response } => Some(response),
            _ => None,
        }
    }

    /// Try to decode the HTTP error body as JSON.
    ///
    /// Returns `Some(Ok(value))` if this is an HTTP error whose body
    /// deserializes successfully, `Some(Err(error))` if decoding fails,
    /// or `None` if this is not an HTTP error.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct ServiceError {
    ///     code: String,
    ///     message: String,
    /// }
    ///
    /// match client.send(op).await {
    ///     Ok(response) => { /* ... */ }
    ///     Err(e) => {
    ///         if let Some(Ok(detail)) = e.decode_body::<ServiceError>() {
    ///             eprintln!("{}: {}", detail.code, detail.message);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.response().map(|response| crate::from_json(response.body()))
    }
}
