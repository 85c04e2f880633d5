//! Request body variants and serialization.
//!
//! [`Body`] is the tagged union a generated operation attaches to its
//! descriptor: either a form (URL-encoded or multipart, depending on the
//! declared media type) or raw content (structured JSON or opaque bytes).
//! A single switch in [`Body::encode`] turns it into wire bytes plus the
//! content type the encoder picked.

use bytes::Bytes;

use crate::multipart::{MultipartForm, Part};
use crate::Result;

/// Content types used by the body encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Form URL-encoded content type (`application/x-www-form-urlencoded`).
    FormUrlEncoded,
    /// Binary content type (`application/octet-stream`).
    OctetStream,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlEncoded => "application/x-www-form-urlencoded",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of a single form field.
#[derive(Debug, Clone)]
pub enum FormValue {
    /// Plain text field.
    Text(String),
    /// File field; only rendered under a multipart media type.
    File {
        /// Filename reported in the part's `Content-Disposition`.
        filename: String,
        /// Part content type; defaults to `application/octet-stream`.
        content_type: Option<String>,
        /// File payload.
        data: Bytes,
    },
}

impl FormValue {
    /// Text field value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// File field value.
    #[must_use]
    pub fn file(
        filename: impl Into<String>,
        content_type: Option<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self::File {
            filename: filename.into(),
            content_type,
            data: data.into(),
        }
    }
}

/// Raw content payload.
#[derive(Debug, Clone)]
pub enum Payload {
    /// Structured value, serialized to JSON text at encoding time.
    Json(serde_json::Value),
    /// Opaque bytes passed through unchanged.
    Raw(Bytes),
}

/// Request body: a form field set or raw content.
#[derive(Debug, Clone)]
pub enum Body {
    /// Form body. Rendered as multipart when the media type says so,
    /// URL-encoded otherwise.
    Form {
        /// Declared media type; multipart detection keys off this.
        media_type: Option<String>,
        /// Field entries; unset values are dropped at encoding time.
        fields: Vec<(String, Option<FormValue>)>,
    },
    /// Raw content body.
    Content {
        /// Declared content type; defaults to JSON.
        content_type: Option<String>,
        /// The payload itself.
        payload: Payload,
    },
}

impl Body {
    /// JSON content body from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self> {
        Ok(Self::Content {
            content_type: None,
            payload: Payload::Json(serde_json::to_value(value)?),
        })
    }

    /// Raw content body with an optional declared content type.
    #[must_use]
    pub fn raw(content_type: Option<String>, data: impl Into<Bytes>) -> Self {
        Self::Content {
            content_type,
            payload: Payload::Raw(data.into()),
        }
    }

    /// URL-encoded form body.
    #[must_use]
    pub fn form(fields: Vec<(String, Option<FormValue>)>) -> Self {
        Self::Form {
            media_type: None,
            fields,
        }
    }

    /// Multipart form body.
    #[must_use]
    pub fn multipart(fields: Vec<(String, Option<FormValue>)>) -> Self {
        Self::Form {
            media_type: Some("multipart/form-data".to_string()),
            fields,
        }
    }

    /// Encode into (content type, wire bytes).
    ///
    /// Form bodies with a multipart media type become `multipart/form-data`
    /// built from the fields whose value is set; other form bodies are
    /// URL-encoded `key=value` pairs joined with `&`. Content bodies
    /// serialize `Json` payloads to JSON text and pass `Raw` payloads
    /// through, with the declared content type or JSON by default.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON or form serialization fails.
    pub fn encode(self) -> Result<(String, Bytes)> {
        match self {
            Self::Form { media_type, fields } => {
                if is_multipart(media_type.as_deref()) {
                    Ok(encode_multipart(fields))
                } else {
                    encode_urlencoded(fields)
                }
            }
            Self::Content {
                content_type,
                payload,
            } => {
                let content_type =
                    content_type.unwrap_or_else(|| ContentType::Json.as_str().to_string());
                let bytes = match payload {
                    Payload::Json(value) => Bytes::from(serde_json::to_vec(&value)?),
                    Payload::Raw(bytes) => bytes,
                };
                Ok((content_type, bytes))
            }
        }
    }
}

fn is_multipart(media_type: Option<&str>) -> bool {
    media_type.is_some_and(|m| m.starts_with("multipart/"))
}

fn encode_multipart(fields: Vec<(String, Option<FormValue>)>) -> (String, Bytes) {
    let mut form = MultipartForm::new();
    for (name, value) in fields {
        let Some(value) = value else { continue };
        let part = match value {
            FormValue::Text(text) => Part::text(name, text),
            FormValue::File {
                filename,
                content_type,
                data,
            } => Part::file(name, filename, content_type, data),
        };
        form = form.part(part);
    }
    form.into_body()
}

fn encode_urlencoded(fields: Vec<(String, Option<FormValue>)>) -> Result<(String, Bytes)> {
    let pairs: Vec<(String, String)> = fields
        .into_iter()
        .filter_map(|(name, value)| match value {
            Some(FormValue::Text(text)) => Some((name, text)),
            // File fields are only meaningful under multipart.
            Some(FormValue::File { .. }) | None => None,
        })
        .collect();

    let encoded = serde_urlencoded::to_string(&pairs)?;
    Ok((
        ContentType::FormUrlEncoded.as_str().to_string(),
        Bytes::from(encoded.into_bytes()),
    ))
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes to a value with path-aware error messages.
///
/// Uses `serde_path_to_error` so decode failures name the exact field that
/// failed (e.g., "instance.shape.ocpus").
///
/// # Errors
///
/// Returns an error if JSON deserialization fails.
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::json_deserialization(e.path().to_string(), e.inner().to_string())
    })
}
