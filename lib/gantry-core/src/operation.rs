//! Operation descriptors.
//!
//! An [`Operation`] is the structured description of one API call before it
//! is turned into a wire-level [`crate::Request`]: the operation name (used
//! for diagnostics and handed to interceptors), path, method, declared
//! headers, query parameters, and optional body. Generated per-service
//! clients populate one per call and hand it to the invoker.

use http::{Extensions, Method};

use crate::{Body, QueryParam};

/// Description of a single API operation invocation.
#[derive(Debug, Clone)]
pub struct Operation {
    name: String,
    method: Method,
    path: String,
    headers: Vec<(String, Option<String>)>,
    query: Vec<QueryParam>,
    body: Option<Body>,
    extensions: Extensions,
}

impl Operation {
    /// Creates a new [`OperationBuilder`].
    #[must_use]
    pub fn builder(
        name: impl Into<String>,
        method: Method,
        path: impl Into<String>,
    ) -> OperationBuilder {
        OperationBuilder::new(name, method, path)
    }

    /// Operation name, e.g. `ListInstances`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Path relative to the client endpoint, e.g. `/20160918/instances`.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Declared headers; entries with an unset value are skipped when the
    /// request is built.
    #[must_use]
    pub fn headers(&self) -> &[(String, Option<String>)] {
        &self.headers
    }

    /// Query parameters.
    #[must_use]
    pub fn query(&self) -> &[QueryParam] {
        &self.query
    }

    /// Request body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }

    /// Consume into (name, method, path, headers, query, body, extensions).
    #[must_use]
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        String,
        Method,
        String,
        Vec<(String, Option<String>)>,
        Vec<QueryParam>,
        Option<Body>,
        Extensions,
    ) {
        (
            self.name,
            self.method,
            self.path,
            self.headers,
            self.query,
            self.body,
            self.extensions,
        )
    }
}

/// Builder for [`Operation`] descriptors.
#[derive(Debug, Clone)]
pub struct OperationBuilder {
    name: String,
    method: Method,
    path: String,
    headers: Vec<(String, Option<String>)>,
    query: Vec<QueryParam>,
    body: Option<Body>,
    extensions: Extensions,
}

impl OperationBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new(name: impl Into<String>, method: Method, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            path: path.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: None,
            extensions: Extensions::new(),
        }
    }

    /// Declares a header. Unset values are skipped at request build time, so
    /// optional headers can be passed through without a call-site branch.
    #[must_use]
    pub fn header(
        mut self,
        name: impl Into<String>,
        value: Option<impl std::fmt::Display>,
    ) -> Self {
        self.headers
            .push((name.into(), value.map(|v| v.to_string())));
        self
    }

    /// Adds a query parameter.
    #[must_use]
    pub fn query(mut self, param: QueryParam) -> Self {
        self.query.push(param);
        self
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a JSON content body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: serde::Serialize>(self, value: &T) -> crate::Result<Self> {
        let body = Body::json(value)?;
        Ok(self.body(body))
    }

    /// Stores a per-request extension value, transferred onto the outgoing
    /// request for transports and interceptors to read.
    #[must_use]
    pub fn extension<T: Clone + Send + Sync + 'static>(mut self, value: T) -> Self {
        self.extensions.insert(value);
        self
    }

    /// Builds the [`Operation`].
    #[must_use]
    pub fn build(self) -> Operation {
        Operation {
            name: self.name,
            method: self.method,
            path: self.path,
            headers: self.headers,
            query: self.query,
            body: self.body,
            extensions: self.extensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CollectionFormat;

    #[test]
    fn operation_builder_basic() {
        let op = Operation::builder("ListInstances", Method::GET, "/20160918/instances")
            .header("opc-request-id", Some("req-1"))
            .header("if-match", None::<String>)
            .query(QueryParam::single("limit", 50))
            .build();

        assert_eq!(op.name(), "ListInstances");
        assert_eq!(op.method(), &Method::GET);
        assert_eq!(op.path(), "/20160918/instances");
        assert_eq!(op.headers().len(), 2);
        assert_eq!(op.query().len(), 1);
        assert!(op.body().is_none());
    }

    #[test]
    fn operation_with_json_body() {
        #[derive(serde::Serialize)]
        struct Launch {
            shape: String,
        }

        let op = Operation::builder("LaunchInstance", Method::POST, "/20160918/instances")
            .json(&Launch {
                shape: "VM.Standard2.1".to_string(),
            })
            .expect("json body")
            .build();

        assert!(matches!(op.body(), Some(Body::Content { .. })));
    }

    #[test]
    fn operation_query_formats() {
        let op = Operation::builder("ListInstances", Method::GET, "/instances")
            .query(QueryParam::repeated(
                "lifecycleState",
                ["RUNNING", "STOPPED"],
                CollectionFormat::Multi,
            ))
            .build();

        let pairs: Vec<_> = op.query().iter().flat_map(QueryParam::pairs).collect();
        assert_eq!(pairs.len(), 2);
    }
}
