//! Query parameter serialization with collection formats.
//!
//! A [`QueryParam`] carries one or more optional values plus the
//! [`CollectionFormat`] deciding how a multi-valued parameter is rendered
//! into URL query entries: either one entry per value (`Multi`) or a single
//! joined entry (`Csv`, `Ssv`, `Tsv`, `Pipes`).

use std::fmt;

/// Strategy for serializing a multi-valued query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionFormat {
    /// Comma-separated values in a single entry (`?tags=a,b,c`). Default.
    #[default]
    Csv,
    /// Space-separated values in a single entry.
    Ssv,
    /// Tab-separated values in a single entry.
    Tsv,
    /// Pipe-separated values in a single entry (`?tags=a|b|c`).
    Pipes,
    /// One entry per value (`?tags=a&tags=b&tags=c`).
    Multi,
}

impl CollectionFormat {
    /// Separator used to join values into a single entry, or `None` for
    /// [`CollectionFormat::Multi`].
    #[must_use]
    pub const fn separator(self) -> Option<&'static str> {
        match self {
            Self::Csv => Some(","),
            Self::Ssv => Some(" "),
            Self::Tsv => Some("\t"),
            Self::Pipes => Some("|"),
            Self::Multi => None,
        }
    }
}

/// A single query parameter: name, values, and collection format.
///
/// Values are optional; unset values are dropped when rendering, and a
/// parameter whose values are all unset is omitted from the URL entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    name: String,
    values: Vec<Option<String>>,
    format: CollectionFormat,
}

impl QueryParam {
    /// Single-valued parameter.
    #[must_use]
    pub fn single(name: impl Into<String>, value: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            values: vec![Some(value.to_string())],
            format: CollectionFormat::default(),
        }
    }

    /// Single optional value; the parameter is omitted when `None`.
    #[must_use]
    pub fn optional(name: impl Into<String>, value: Option<impl fmt::Display>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.map(|v| v.to_string())],
            format: CollectionFormat::default(),
        }
    }

    /// Multi-valued parameter rendered per the given collection format.
    #[must_use]
    pub fn repeated<T: fmt::Display>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = T>,
        format: CollectionFormat,
    ) -> Self {
        Self {
            name: name.into(),
            values: values.into_iter().map(|v| Some(v.to_string())).collect(),
            format,
        }
    }

    /// Multi-valued parameter where individual values may be unset.
    ///
    /// Unset values are dropped before rendering; remaining values keep
    /// their relative order.
    #[must_use]
    pub fn repeated_opt<T: fmt::Display>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<T>>,
        format: CollectionFormat,
    ) -> Self {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|v| v.map(|inner| inner.to_string()))
                .collect(),
            format,
        }
    }

    /// Parameter name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection format.
    #[must_use]
    pub const fn format(&self) -> CollectionFormat {
        self.format
    }

    /// Render this parameter into URL query entries.
    ///
    /// Returns an empty vector when every value is unset, one entry per
    /// value for [`CollectionFormat::Multi`], and a single joined entry
    /// otherwise.
    #[must_use]
    pub fn pairs(&self) -> Vec<(String, String)> {
        let present: Vec<&str> = self
            .values
            .iter()
            .filter_map(|v| v.as_deref())
            .collect();

        if present.is_empty() {
            return Vec::new();
        }

        match self.format.separator() {
            None => present
                .into_iter()
                .map(|v| (self.name.clone(), v.to_string()))
                .collect(),
            Some(sep) => vec![(self.name.clone(), present.join(sep))],
        }
    }
}
