//! Literal parsing and cross-kind coercion.
//!
//! The same rules serve two callers: the environment overlay, which coerces
//! raw variable text into the kind already stored at a key, and the typed
//! accessors, which read a stored value as the kind the caller asks for.
//! Scalars that are not already the requested kind are rendered with
//! [`ConfigValue::literal`] and parsed back, so `"8080"` reads as integer
//! `8080` and `Float(3.0)` reads as integer `3`, while `Float(3.5)` does not.

use crate::error::{ChainError, ChainResult};
use crate::value::{ConfigValue, ValueKind};

/// Parse a boolean token.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
///
/// # Examples
///
/// ```rust
/// use config_chain::coerce::parse_bool;
///
/// assert_eq!(parse_bool("True"), Some(true));
/// assert_eq!(parse_bool("0"), Some(false));
/// assert_eq!(parse_bool("yes"), None);
/// ```
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a base-10 signed integer literal.
#[must_use]
pub fn parse_integer(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Parse a floating-point literal.
#[must_use]
pub fn parse_float(raw: &str) -> Option<f64> {
    raw.parse().ok()
}

/// Coerce raw text into a value of `kind`.
///
/// Strings pass through unchanged and absent targets accept the text as a
/// string. Sequences accept a JSON array literal or a comma-separated list
/// of strings. Mappings never coerce. Returns `None` when the text does not
/// parse as the requested kind.
#[must_use]
pub fn coerce_literal(raw: &str, kind: ValueKind) -> Option<ConfigValue> {
    match kind {
        ValueKind::String | ValueKind::Absent => Some(ConfigValue::String(raw.to_owned())),
        ValueKind::Integer => parse_integer(raw).map(ConfigValue::Integer),
        ValueKind::Float => parse_float(raw).map(ConfigValue::Float),
        ValueKind::Boolean => parse_bool(raw).map(ConfigValue::Boolean),
        ValueKind::Sequence => parse_sequence(raw),
        ValueKind::Mapping => None,
    }
}

fn parse_sequence(raw: &str) -> Option<ConfigValue> {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        return match serde_json::from_str::<ConfigValue>(trimmed) {
            Ok(value @ ConfigValue::Sequence(_)) => Some(value),
            _ => None,
        };
    }
    if trimmed.is_empty() {
        return Some(ConfigValue::Sequence(Vec::new()));
    }
    Some(ConfigValue::Sequence(
        trimmed
            .split(',')
            .map(|item| ConfigValue::String(item.trim().to_owned()))
            .collect(),
    ))
}

/// Read `value` as `T` through its literal form.
///
/// `native` extracts the value when it already has the requested kind;
/// otherwise scalars are rendered and handed to `parse`.
fn read_scalar<T>(
    key: &str,
    value: &ConfigValue,
    expected: ValueKind,
    native: impl FnOnce(&ConfigValue) -> Option<T>,
    parse: impl FnOnce(&str) -> Option<T>,
) -> ChainResult<Option<T>> {
    if value.is_absent() {
        return Ok(None);
    }
    if let Some(direct) = native(value) {
        return Ok(Some(direct));
    }
    value
        .literal()
        .and_then(|text| parse(&text))
        .map(Some)
        .ok_or_else(|| ChainError::type_mismatch(key, expected, value.kind()))
}

pub(crate) fn read_string(key: &str, value: &ConfigValue) -> ChainResult<Option<String>> {
    read_scalar(
        key,
        value,
        ValueKind::String,
        |v| match v {
            ConfigValue::String(text) => Some(text.clone()),
            _ => None,
        },
        |text| Some(text.to_owned()),
    )
}

pub(crate) fn read_integer(key: &str, value: &ConfigValue) -> ChainResult<Option<i64>> {
    read_scalar(
        key,
        value,
        ValueKind::Integer,
        |v| match v {
            ConfigValue::Integer(number) => Some(*number),
            _ => None,
        },
        parse_integer,
    )
}

pub(crate) fn read_float(key: &str, value: &ConfigValue) -> ChainResult<Option<f64>> {
    read_scalar(
        key,
        value,
        ValueKind::Float,
        |v| match v {
            ConfigValue::Float(number) => Some(*number),
            _ => None,
        },
        parse_float,
    )
}

pub(crate) fn read_boolean(key: &str, value: &ConfigValue) -> ChainResult<Option<bool>> {
    read_scalar(
        key,
        value,
        ValueKind::Boolean,
        |v| match v {
            ConfigValue::Boolean(flag) => Some(*flag),
            _ => None,
        },
        parse_bool,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ConfigMap;
    use rstest::rstest;

    #[rstest]
    #[case("1", Some(true))]
    #[case("TRUE", Some(true))]
    #[case("f", Some(false))]
    #[case("False", Some(false))]
    #[case("yes", None)]
    #[case("", None)]
    #[case(" true", None)]
    fn boolean_tokens(#[case] raw: &str, #[case] expected: Option<bool>) {
        assert_eq!(parse_bool(raw), expected);
    }

    #[rstest]
    #[case("9090", ValueKind::Integer, Some(ConfigValue::Integer(9090)))]
    #[case("-3", ValueKind::Integer, Some(ConfigValue::Integer(-3)))]
    #[case("90.5", ValueKind::Integer, None)]
    #[case("0.75", ValueKind::Float, Some(ConfigValue::Float(0.75)))]
    #[case("12", ValueKind::Float, Some(ConfigValue::Float(12.0)))]
    #[case("abc", ValueKind::Float, None)]
    #[case("false", ValueKind::Boolean, Some(ConfigValue::Boolean(false)))]
    #[case("nope", ValueKind::Boolean, None)]
    #[case("8080", ValueKind::String, Some(ConfigValue::from("8080")))]
    #[case("seed", ValueKind::Absent, Some(ConfigValue::from("seed")))]
    #[case("{}", ValueKind::Mapping, None)]
    fn literal_coercion(
        #[case] raw: &str,
        #[case] kind: ValueKind,
        #[case] expected: Option<ConfigValue>,
    ) {
        assert_eq!(coerce_literal(raw, kind), expected);
    }

    #[rstest]
    #[case("a, b,c", vec!["a", "b", "c"])]
    #[case(r#"["x", "y"]"#, vec!["x", "y"])]
    #[case("", vec![])]
    fn sequence_coercion(#[case] raw: &str, #[case] expected: Vec<&str>) {
        let expected = ConfigValue::Sequence(expected.into_iter().map(ConfigValue::from).collect());
        assert_eq!(coerce_literal(raw, ValueKind::Sequence), Some(expected));
    }

    #[rstest]
    fn malformed_json_sequence_does_not_coerce() {
        assert_eq!(coerce_literal("[1,", ValueKind::Sequence), None);
    }

    #[rstest]
    #[case(ConfigValue::Float(3.0), Some(3))]
    #[case(ConfigValue::from("8080"), Some(8080))]
    #[case(ConfigValue::Absent, None)]
    fn integer_reads(#[case] value: ConfigValue, #[case] expected: Option<i64>) {
        assert_eq!(read_integer("k", &value).ok().flatten(), expected);
    }

    #[rstest]
    #[case(ConfigValue::Float(3.5), ValueKind::Float)]
    #[case(ConfigValue::Boolean(true), ValueKind::Boolean)]
    #[case(ConfigValue::Mapping(ConfigMap::new()), ValueKind::Mapping)]
    fn integer_mismatches(#[case] value: ConfigValue, #[case] found: ValueKind) {
        let err = read_integer("k", &value).expect_err("value should not read as integer");
        assert!(matches!(
            &*err,
            ChainError::TypeMismatch { expected: ValueKind::Integer, found: f, .. } if *f == found
        ));
    }

    #[rstest]
    fn scalars_render_as_strings() {
        assert_eq!(
            read_string("k", &ConfigValue::Float(20.5)).ok().flatten().as_deref(),
            Some("20.5")
        );
        assert_eq!(
            read_string("k", &ConfigValue::Boolean(true)).ok().flatten().as_deref(),
            Some("true")
        );
    }

    #[rstest]
    fn numbers_read_as_booleans_through_tokens() {
        assert_eq!(read_boolean("k", &ConfigValue::Integer(1)).ok().flatten(), Some(true));
        assert!(read_boolean("k", &ConfigValue::Integer(2)).is_err());
    }

    #[rstest]
    fn integers_read_as_floats() {
        assert_eq!(read_float("k", &ConfigValue::Integer(8080)).ok().flatten(), Some(8080.0));
    }
}
