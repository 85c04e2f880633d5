//! Core types for the gantry API client runtime.
//!
//! This crate provides the foundational types used by generated API clients
//! and the `gantry` invoker:
//! - [`Operation`] and [`OperationBuilder`] - descriptor of one API call
//! - [`Request`] and [`RequestBuilder`] - wire-level HTTP request
//! - [`Response`] and [`Decoded`] - HTTP response and parsed-payload pair
//! - [`QueryParam`] and [`CollectionFormat`] - query parameter serialization
//! - [`Body`] - form/content body sum type with encoders
//! - [`EndpointTemplate`] and [`render_path`] - endpoint and path templating
//! - [`check_required`] - required-parameter validation
//! - [`Error`] and [`Result`] - error handling
//! - [`Transport`] - the trait the invoker sends requests through
//! - [`Method`], [`StatusCode`], [`header`] - re-exported from the `http` crate

mod body;
mod endpoint;
mod error;
mod multipart;
mod operation;
pub mod prelude;
mod query;
mod request;
mod response;
mod transport;
mod validate;

pub use body::{Body, ContentType, FormValue, Payload, from_json, to_json};
pub use endpoint::{EndpointTemplate, render_path};
pub use error::{Error, Result};
pub use multipart::{MultipartForm, Part};
pub use operation::{Operation, OperationBuilder};
pub use query::{CollectionFormat, QueryParam};
pub use request::{Request, RequestBuilder};
pub use response::{Decoded, Response};
pub use transport::Transport;
pub use validate::check_required;

// Re-export http crate types for methods, status codes, and headers
pub use http::{Extensions, Method, StatusCode, header};
