//! Prelude module for convenient imports.
//!
//! ```ignore
//! use gantry::prelude::*;
//! ```

pub use crate::interceptor::{
    ErrorHook, RequestInterceptor, ResponseInterceptor, error_fn, request_fn, response_fn,
};
pub use crate::{
    ApiClient, Body, ClientConfig, CollectionFormat, ContentType, Decoded, EndpointTemplate,
    Error, HyperTransport, Method, Operation, QueryParam, Request, Response, Result, StatusCode,
    Transport, TransportConfig, check_required, from_json, render_path, to_json,
};
pub use serde::{Deserialize, Serialize};
