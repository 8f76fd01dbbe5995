//! Format-specific parsing into the configuration data model.

use serde_saphyr::Options;

use crate::error::{ChainError, ChainResult, TextLocation};
use crate::value::{ConfigMap, ConfigValue};

use super::DocumentFormat;

/// Parse `text` as `format`, requiring a mapping at the top level.
///
/// A top-level `null` and blank YAML yield an empty mapping. Blank JSON is
/// not a JSON value and fails like any other syntax error.
pub(super) fn parse_document(
    format: DocumentFormat,
    origin: &str,
    text: &str,
) -> ChainResult<ConfigMap> {
    let value = match format {
        DocumentFormat::Json => parse_json(origin, text)?,
        DocumentFormat::Yaml => parse_yaml(origin, text)?,
    };
    match value {
        ConfigValue::Mapping(map) => Ok(map),
        ConfigValue::Absent => Ok(ConfigMap::new()),
        other => Err(ChainError::parse(
            format,
            origin,
            None,
            format!("top-level {} is not a mapping", other.kind()),
        )),
    }
}

fn parse_json(origin: &str, text: &str) -> ChainResult<ConfigValue> {
    serde_json::from_str(text).map_err(|err| {
        let location = (err.line() > 0).then(|| TextLocation {
            line: err.line(),
            column: err.column(),
        });
        ChainError::parse(DocumentFormat::Json, origin, location, err)
    })
}

/// Parse YAML with strict boolean semantics, so `yes` and `on` stay strings.
fn parse_yaml(origin: &str, text: &str) -> ChainResult<ConfigValue> {
    if text.trim().is_empty() {
        return Ok(ConfigValue::Absent);
    }
    serde_saphyr::from_str_with_options(
        text,
        Options {
            strict_booleans: true,
            ..Options::default()
        },
    )
    .map_err(|err| {
        let location = err.location().map(|loc| TextLocation {
            line: usize::try_from(loc.line()).unwrap_or(usize::MAX),
            column: usize::try_from(loc.column()).unwrap_or(usize::MAX),
        });
        ChainError::parse(DocumentFormat::Yaml, origin, location, err)
    })
}
