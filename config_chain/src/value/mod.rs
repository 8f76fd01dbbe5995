//! The configuration data model.
//!
//! Every parsed document, static map, and environment overlay is expressed
//! as a [`ConfigMap`] of [`ConfigValue`] entries. The variant is explicit so
//! each read site matches exhaustively instead of downcasting untyped data.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

mod serde_impl;

/// A mapping level: unique string keys to configuration values.
///
/// Later writes replace earlier ones. Ordering carries no meaning; the
/// `BTreeMap` only makes iteration and debug output deterministic.
pub type ConfigMap = BTreeMap<String, ConfigValue>;

/// A single parsed configuration value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConfigValue {
    /// Text.
    String(String),
    /// Signed 64-bit integer.
    Integer(i64),
    /// 64-bit floating-point number.
    Float(f64),
    /// Boolean flag.
    Boolean(bool),
    /// Nested mapping.
    Mapping(ConfigMap),
    /// Ordered list of values.
    Sequence(Vec<ConfigValue>),
    /// No value (`null` in JSON, `~` in YAML, or a missing key).
    #[default]
    Absent,
}

/// Discriminant of a [`ConfigValue`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// [`ConfigValue::String`].
    String,
    /// [`ConfigValue::Integer`].
    Integer,
    /// [`ConfigValue::Float`].
    Float,
    /// [`ConfigValue::Boolean`].
    Boolean,
    /// [`ConfigValue::Mapping`].
    Mapping,
    /// [`ConfigValue::Sequence`].
    Sequence,
    /// [`ConfigValue::Absent`].
    Absent,
}

impl ValueKind {
    /// Lower-case name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Mapping => "mapping",
            Self::Sequence => "sequence",
            Self::Absent => "absent",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) static ABSENT: ConfigValue = ConfigValue::Absent;

impl ConfigValue {
    /// Returns the runtime kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Absent => ValueKind::Absent,
        }
    }

    /// Returns `true` for [`ConfigValue::Absent`].
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrows the nested mapping, if this value is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&ConfigMap> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Canonical textual form of a scalar.
    ///
    /// Strings are returned as-is; numbers and booleans use their `Display`
    /// output, so `Float(3.0)` renders as `3`. Mappings, sequences, and
    /// absent values have no literal form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_chain::ConfigValue;
    ///
    /// assert_eq!(ConfigValue::Float(20.5).literal().as_deref(), Some("20.5"));
    /// assert_eq!(ConfigValue::Boolean(true).literal().as_deref(), Some("true"));
    /// assert!(ConfigValue::Absent.literal().is_none());
    /// ```
    #[must_use]
    pub fn literal(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(text) => Some(Cow::Borrowed(text.as_str())),
            Self::Integer(number) => Some(Cow::Owned(number.to_string())),
            Self::Float(number) => Some(Cow::Owned(number.to_string())),
            Self::Boolean(flag) => Some(Cow::Owned(flag.to_string())),
            Self::Mapping(_) | Self::Sequence(_) | Self::Absent => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(value: ConfigMap) -> Self {
        Self::Mapping(value)
    }
}

impl From<Vec<Self>> for ConfigValue {
    fn from(value: Vec<Self>) -> Self {
        Self::Sequence(value)
    }
}

#[cfg(test)]
mod tests;
