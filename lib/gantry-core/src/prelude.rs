//! Prelude module for convenient imports.
//!
//! ```ignore
//! use gantry_core::prelude::*;
//! ```

pub use crate::{
    Body, CollectionFormat, ContentType, Decoded, EndpointTemplate, Error, FormValue, Method,
    Operation, QueryParam, Request, Response, Result, StatusCode, Transport, check_required,
    from_json, render_path, to_json,
};
