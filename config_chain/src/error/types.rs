//! Primary error enum for configuration resolution.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::source::DocumentFormat;
use crate::value::ValueKind;

/// Line and column reported by a document parser, both one-based.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextLocation {
    /// One-based line number.
    pub line: usize,
    /// One-based column number.
    pub column: usize,
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors that can occur while resolving configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChainError {
    /// A JSON or YAML document is not valid for its declared format.
    #[error("failed to parse {format} from {origin}{}: {source}", at(.location.as_ref()))]
    Parse {
        /// Format the text was declared as.
        format: DocumentFormat,
        /// File path or `<inline>` for in-memory text.
        origin: String,
        /// Position of the syntax error, when the parser reports one.
        location: Option<TextLocation>,
        /// Underlying parser error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A configuration file has an extension no parser is registered for.
    #[error("configuration format '{extension}' not supported for '{}'", .path.display())]
    UnsupportedFormat {
        /// Offending file.
        path: PathBuf,
        /// Extension as written, without the leading dot; empty when missing.
        extension: String,
    },

    /// A value is present but cannot be read as the requested kind.
    #[error("value at '{key}' is {found}, which cannot be read as {expected}")]
    TypeMismatch {
        /// Key that was read.
        key: String,
        /// Kind the caller asked for.
        expected: ValueKind,
        /// Kind actually stored.
        found: ValueKind,
    },

    /// An existing configuration file could not be read.
    #[error("configuration file error in '{}': {source}", .path.display())]
    File {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The resolved mapping does not deserialise into the requested type.
    #[error("failed to extract typed configuration: {source}")]
    Extract {
        /// Underlying deserialisation error.
        #[source]
        source: serde_json::Error,
    },
}

fn at(location: Option<&TextLocation>) -> String {
    location.map_or_else(String::new, |loc| format!(" at {loc}"))
}
