//! Constructors for `ChainError` variants.

use std::path::Path;
use std::sync::Arc;

use crate::source::DocumentFormat;
use crate::value::ValueKind;

use super::{ChainError, TextLocation};

impl ChainError {
    /// Construct a parse error for text declared as `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_chain::{ChainError, DocumentFormat};
    /// let err = ChainError::parse(DocumentFormat::Json, "<inline>", None, "boom");
    /// assert!(matches!(&*err, ChainError::Parse { .. }));
    /// ```
    #[must_use]
    pub fn parse(
        format: DocumentFormat,
        origin: impl Into<String>,
        location: Option<TextLocation>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Arc<Self> {
        Arc::new(Self::Parse {
            format,
            origin: origin.into(),
            location,
            source: source.into(),
        })
    }

    /// Construct an unsupported-format error for `path`.
    #[must_use]
    pub fn unsupported_format(path: &Path, extension: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: extension.into(),
        })
    }

    /// Construct a type-mismatch error for `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use config_chain::{ChainError, ValueKind};
    /// let err = ChainError::type_mismatch("port", ValueKind::Integer, ValueKind::String);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "value at 'port' is string, which cannot be read as integer"
    /// );
    /// ```
    #[must_use]
    pub fn type_mismatch(
        key: impl Into<String>,
        expected: ValueKind,
        found: ValueKind,
    ) -> Arc<Self> {
        Arc::new(Self::TypeMismatch {
            key: key.into(),
            expected,
            found,
        })
    }

    /// Construct a file error for `path`.
    #[must_use]
    pub fn file(path: &Path, source: std::io::Error) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Construct an extraction error.
    #[must_use]
    pub fn extract(source: serde_json::Error) -> Arc<Self> {
        Arc::new(Self::Extract { source })
    }
}
