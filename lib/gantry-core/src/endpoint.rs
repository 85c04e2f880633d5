//! Endpoint templating and path rendering.
//!
//! Service endpoints are declared as host templates with `{region}` and
//! `{secondLevelDomain}` placeholders; [`EndpointTemplate::resolve`] turns
//! one into a fully qualified API root. [`render_path`] substitutes path
//! parameters into an operation path template with percent-encoded segment
//! values.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be encoded inside a single path segment.
///
/// Everything outside unreserved + sub-delims, notably `/` so a value can
/// never introduce a new segment.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// A service endpoint host template.
///
/// # Example
///
/// ```
/// use gantry_core::EndpointTemplate;
///
/// let template = EndpointTemplate::new("https://{region}.example.com/{secondLevelDomain}");
/// let root = template.resolve("us-1", "oci", "/v1/");
/// assert_eq!(root, "https://us-1.example.com/oci/v1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EndpointTemplate(String);

impl EndpointTemplate {
    /// Create a new endpoint template.
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The raw template string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substitute the placeholders and append the base path.
    ///
    /// A single trailing slash is stripped from the base path before
    /// concatenation, so `/v1/` and `/v1` resolve identically and the
    /// operation path can always start with `/`.
    #[must_use]
    pub fn resolve(&self, region: &str, second_level_domain: &str, base_path: &str) -> String {
        let host = self
            .0
            .replace("{region}", region)
            .replace("{secondLevelDomain}", second_level_domain);
        let base = base_path.strip_suffix('/').unwrap_or(base_path);
        format!("{host}{base}")
    }
}

impl std::fmt::Display for EndpointTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Substitute `{name}` placeholders in a path template.
///
/// Values are percent-encoded as path segments, so a value containing `/`
/// cannot change the path shape.
#[must_use]
pub fn render_path(template: &str, params: &[(&str, &str)]) -> String {
    let mut path = template.to_string();
    for (name, value) in params {
        let placeholder = format!("{{{name}}}");
        let encoded = utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string();
        path = path.replace(&placeholder, &encoded);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_substitutes_and_strips_trailing_slash() {
        let template = EndpointTemplate::new("https://{region}.example.com/{secondLevelDomain}");
        assert_eq!(
            template.resolve("us-1", "oci", "/v1/"),
            "https://us-1.example.com/oci/v1"
        );
    }

    #[test]
    fn resolve_without_trailing_slash() {
        let template = EndpointTemplate::new("https://{region}.example.com/{secondLevelDomain}");
        assert_eq!(
            template.resolve("eu-2", "oraclecloud", "/20160918"),
            "https://eu-2.example.com/oraclecloud/20160918"
        );
    }

    #[test]
    fn resolve_strips_only_one_slash() {
        let template = EndpointTemplate::new("https://{region}.host");
        assert_eq!(template.resolve("r", "d", "//"), "https://r.host/");
    }

    #[test]
    fn render_path_substitutes_parameters() {
        let path = render_path(
            "/instances/{instanceId}/actions/{action}",
            &[("instanceId", "ocid1.instance.oc1..x"), ("action", "STOP")],
        );
        assert_eq!(path, "/instances/ocid1.instance.oc1..x/actions/STOP");
    }

    #[test]
    fn render_path_encodes_segment_values() {
        let path = render_path("/buckets/{name}", &[("name", "a/b c")]);
        assert_eq!(path, "/buckets/a%2Fb%20c");
    }
}
