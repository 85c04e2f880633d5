//! Request building and dispatch runtime for generated cloud REST API
//! clients.
//!
//! Generated per-service clients describe each call as an
//! [`Operation`] and delegate to a shared [`ApiClient`], which builds the
//! wire-level request, runs it through the configured interceptor chains,
//! sends it over a [`Transport`], and normalizes the result into a typed
//! success value or an error carrying the failed response.
//!
//! # Example
//!
//! ```ignore
//! use gantry::prelude::*;
//!
//! #[derive(Debug, Deserialize)]
//! struct Instance {
//!     id: String,
//!     display_name: String,
//! }
//!
//! let endpoint = EndpointTemplate::new("https://iaas.{region}.example.com/{secondLevelDomain}")
//!     .resolve("us-1", "oraclecloud", "/20160918");
//! let client = ApiClient::new(HyperTransport::new(), endpoint)?;
//!
//! let op = Operation::builder("ListInstances", Method::GET, "/instances")
//!     .query(QueryParam::single("compartmentId", compartment_id))
//!     .build();
//! let instances: Decoded<Vec<Instance>> = client.send_json(op).await?;
//! ```

mod client;
mod config;
mod connector;
pub mod interceptor;
pub mod prelude;
mod transport;

pub use client::ApiClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use transport::{HyperTransport, TransportConfig, TransportConfigBuilder};

// Re-export core types
pub use gantry_core::{
    Body, CollectionFormat, ContentType, Decoded, EndpointTemplate, Error, FormValue,
    MultipartForm, Operation, OperationBuilder, Part, Payload, QueryParam, Request, RequestBuilder,
    Response, Result, Transport, check_required, from_json, render_path, to_json,
};

// Re-export http types for methods, status codes, and headers
pub use gantry_core::{Extensions, Method, StatusCode, header};
