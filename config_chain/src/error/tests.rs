//! Tests for error formatting.

use super::{ChainError, TextLocation};
use crate::source::DocumentFormat;
use crate::value::ValueKind;
use rstest::rstest;
use std::error::Error as _;
use std::path::Path;

#[rstest]
fn parse_error_mentions_location_and_origin() {
    let err = ChainError::parse(
        DocumentFormat::Yaml,
        "config.yaml",
        Some(TextLocation { line: 3, column: 7 }),
        "unexpected end of stream",
    );
    let message = err.to_string();
    assert!(message.contains("YAML"), "{message}");
    assert!(message.contains("config.yaml"), "{message}");
    assert!(message.contains("line 3, column 7"), "{message}");
    assert!(err.source().is_some());
}

#[rstest]
fn parse_error_without_location_omits_position() {
    let err = ChainError::parse(DocumentFormat::Json, "<inline>", None, "bad");
    assert_eq!(err.to_string(), "failed to parse JSON from <inline>: bad");
}

#[rstest]
fn unsupported_format_names_extension() {
    let err = ChainError::unsupported_format(Path::new("app.toml"), "toml");
    assert_eq!(
        err.to_string(),
        "configuration format 'toml' not supported for 'app.toml'"
    );
}

#[rstest]
fn type_mismatch_names_both_kinds() {
    let err = ChainError::type_mismatch("debug", ValueKind::Boolean, ValueKind::Mapping);
    assert!(matches!(
        &*err,
        ChainError::TypeMismatch {
            expected: ValueKind::Boolean,
            found: ValueKind::Mapping,
            ..
        }
    ));
}
