//! JSON and YAML document sources.

use std::fmt;
use std::path::Path;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::error::{ChainError, ChainResult};
use crate::merge::overlay;
use crate::value::ConfigMap;

use super::Source;
use super::parser::parse_document;

/// Text formats a [`DocumentSource`] can parse.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum DocumentFormat {
    /// JSON text.
    Json,
    /// YAML 1.2 text.
    Yaml,
}

impl DocumentFormat {
    /// Select a format from a file extension, ignoring ASCII case.
    ///
    /// Only `json` and `yaml` are recognised.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_chain::DocumentFormat;
    ///
    /// assert_eq!(DocumentFormat::from_extension("JSON"), Some(DocumentFormat::Json));
    /// assert_eq!(DocumentFormat::from_extension("toml"), None);
    /// ```
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Upper-case display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a JSON or YAML document and merges it over the accumulated
/// configuration.
///
/// Text is held unparsed until [`Source::load`] runs, so syntax errors surface
/// from the build rather than from construction.
#[derive(Clone, Debug)]
pub struct DocumentSource {
    format: DocumentFormat,
    text: String,
    path: Option<Utf8PathBuf>,
}

/// Convert a path to UTF-8, falling back to lossy conversion.
fn to_utf8_path(path: &Path) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path.to_path_buf())
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

impl DocumentSource {
    /// Wrap in-memory `text` declared as `format`.
    #[must_use]
    pub fn new(format: DocumentFormat, text: impl Into<String>) -> Self {
        Self {
            format,
            text: text.into(),
            path: None,
        }
    }

    /// Wrap in-memory JSON text.
    #[must_use]
    pub fn json(text: impl Into<String>) -> Self {
        Self::new(DocumentFormat::Json, text)
    }

    /// Wrap in-memory YAML text.
    #[must_use]
    pub fn yaml(text: impl Into<String>) -> Self {
        Self::new(DocumentFormat::Yaml, text)
    }

    /// Read a document from `path`, selecting the format by extension.
    ///
    /// Returns `Ok(None)` when nothing exists at `path`, so callers can treat
    /// optional files as "no source". Existence is checked before the
    /// extension.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_chain::DocumentSource;
    ///
    /// let missing = DocumentSource::from_path("definitely/not/here.json")?;
    /// assert!(missing.is_none());
    /// # Ok::<_, std::sync::Arc<config_chain::ChainError>>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::UnsupportedFormat`] when the extension is not
    /// `json` or `yaml`, and [`ChainError::File`] when the file exists but
    /// cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> ChainResult<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "configuration file not found");
            return Ok(None);
        }
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        let Some(format) = DocumentFormat::from_extension(&extension) else {
            return Err(ChainError::unsupported_format(path, extension));
        };
        let text = std::fs::read_to_string(path).map_err(|err| ChainError::file(path, err))?;
        Ok(Some(Self {
            format,
            text,
            path: Some(to_utf8_path(path)),
        }))
    }

    /// Declared format.
    #[must_use]
    pub const fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Path the document was read from, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Utf8Path> {
        self.path.as_deref()
    }

    fn origin(&self) -> &str {
        self.path.as_deref().map_or("<inline>", Utf8Path::as_str)
    }
}

impl Source for DocumentSource {
    fn load(&self, mut accumulated: ConfigMap) -> ChainResult<ConfigMap> {
        let parsed = parse_document(self.format, self.origin(), &self.text)?;
        overlay(&mut accumulated, parsed);
        Ok(accumulated)
    }

    fn describe(&self) -> String {
        format!("{} document from {}", self.format, self.origin())
    }
}
