//! The immutable result of a build and its typed accessors.
//!
//! [`ResolvedConfig`] owns the merged mapping. [`ConfigView`] is a borrowed
//! window onto a nested mapping inside it, returned by `sub_section`; views
//! never copy data and offer no path back to mutate the parent. Both expose
//! the same read API through [`ConfigAccess`].
//!
//! Typed getters follow a zero-value contract: `get_*` returns `""`, `0`,
//! `0.0` or `false` when a key is missing *or* cannot be read as the
//! requested kind. The `try_get_*` variants distinguish those cases, returning
//! `Ok(None)` for a missing key and [`crate::ChainError::TypeMismatch`] for a
//! present value of the wrong kind.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::coerce::{read_boolean, read_float, read_integer, read_string};
use crate::error::{ChainError, ChainResult};
use crate::value::{ABSENT, ConfigMap, ConfigValue};

/// Read-only access to a configuration mapping.
pub trait ConfigAccess {
    /// Borrow the underlying mapping.
    fn as_map(&self) -> &ConfigMap;

    /// Untyped value at `key`, or [`ConfigValue::Absent`] when missing.
    fn get_raw(&self, key: &str) -> &ConfigValue {
        self.as_map().get(key).unwrap_or(&ABSENT)
    }

    /// Returns `true` when `key` holds a value other than `Absent`.
    fn contains_key(&self, key: &str) -> bool {
        !self.get_raw(key).is_absent()
    }

    /// Top-level keys holding a value.
    ///
    /// Keys set to an explicit `null` are skipped, as with
    /// [`ConfigAccess::contains_key`].
    fn keys(&self) -> impl Iterator<Item = &str> {
        self.as_map()
            .iter()
            .filter(|(_, value)| !value.is_absent())
            .map(|(key, _)| key.as_str())
    }

    /// Number of keys returned by [`ConfigAccess::keys`].
    fn len(&self) -> usize {
        self.keys().count()
    }

    /// Returns `true` when no key holds a value.
    fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }

    /// Read `key` as a string.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TypeMismatch`] for mappings and sequences.
    fn try_get_string(&self, key: &str) -> ChainResult<Option<String>> {
        read_string(key, self.get_raw(key))
    }

    /// Read `key` as an integer.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TypeMismatch`] when the value has no integer
    /// literal form.
    fn try_get_integer(&self, key: &str) -> ChainResult<Option<i64>> {
        read_integer(key, self.get_raw(key))
    }

    /// Read `key` as a float.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TypeMismatch`] when the value has no float
    /// literal form.
    fn try_get_float(&self, key: &str) -> ChainResult<Option<f64>> {
        read_float(key, self.get_raw(key))
    }

    /// Read `key` as a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::TypeMismatch`] when the value is not a boolean
    /// token.
    fn try_get_boolean(&self, key: &str) -> ChainResult<Option<bool>> {
        read_boolean(key, self.get_raw(key))
    }

    /// String at `key`, or `""`.
    fn get_string(&self, key: &str) -> String {
        or_zero(key, self.try_get_string(key))
    }

    /// Integer at `key`, or `0`.
    fn get_integer(&self, key: &str) -> i64 {
        or_zero(key, self.try_get_integer(key))
    }

    /// Float at `key`, or `0.0`.
    fn get_float(&self, key: &str) -> f64 {
        or_zero(key, self.try_get_float(key))
    }

    /// Boolean at `key`, or `false`.
    fn get_boolean(&self, key: &str) -> bool {
        or_zero(key, self.try_get_boolean(key))
    }

    /// Items of the sequence at `key`, or an empty slice.
    fn get_sequence(&self, key: &str) -> &[ConfigValue] {
        match self.get_raw(key) {
            ConfigValue::Sequence(items) => items,
            _ => &[],
        }
    }

    /// View over the nested mapping at `key`.
    ///
    /// Returns `None` when `key` is missing or does not hold a mapping.
    fn sub_section(&self, key: &str) -> Option<ConfigView<'_>> {
        self.get_raw(key).as_mapping().map(ConfigView::new)
    }

    /// Deserialise the mapping into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::Extract`] when the data does not match `T`.
    fn extract<T: DeserializeOwned>(&self) -> ChainResult<T> {
        serde_json::to_value(self.as_map())
            .and_then(serde_json::from_value::<T>)
            .map_err(ChainError::extract)
    }
}

fn or_zero<T: Default>(key: &str, result: ChainResult<Option<T>>) -> T {
    match result {
        Ok(value) => value.unwrap_or_default(),
        Err(err) => {
            debug!(%key, error = %err, "returning the zero value");
            T::default()
        }
    }
}

/// Immutable, fully merged configuration.
///
/// Produced by [`crate::SourceChain::build`]. Exposes no mutators, so it can
/// be shared across threads and read without locking.
///
/// # Examples
///
/// ```rust
/// use config_chain::{ConfigAccess, DocumentSource, SourceChain};
///
/// let config = SourceChain::from_source(DocumentSource::yaml(
///     "app: demo\nsub_section:\n  sub_key: val\n",
/// ))
/// .build()?;
/// let section = config.sub_section("sub_section").expect("section present");
/// assert_eq!(section.get_string("sub_key"), "val");
/// assert!(config.sub_section("app").is_none());
/// # Ok::<_, std::sync::Arc<config_chain::ChainError>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedConfig {
    entries: ConfigMap,
}

impl ResolvedConfig {
    /// Wrap an already merged mapping.
    #[must_use]
    pub const fn new(entries: ConfigMap) -> Self {
        Self { entries }
    }

    /// Borrow the whole configuration as a view.
    #[must_use]
    pub const fn view(&self) -> ConfigView<'_> {
        ConfigView::new(&self.entries)
    }

    /// Consume the configuration, returning its mapping.
    #[must_use]
    pub fn into_map(self) -> ConfigMap {
        self.entries
    }
}

impl From<ConfigMap> for ResolvedConfig {
    fn from(entries: ConfigMap) -> Self {
        Self::new(entries)
    }
}

impl ConfigAccess for ResolvedConfig {
    fn as_map(&self) -> &ConfigMap {
        &self.entries
    }
}

/// Borrowed, read-only view over a nested mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfigView<'a> {
    entries: &'a ConfigMap,
}

impl<'a> ConfigView<'a> {
    const fn new(entries: &'a ConfigMap) -> Self {
        Self { entries }
    }

    /// View over the nested mapping at `key`, borrowing from the same root.
    ///
    /// Unlike [`ConfigAccess::sub_section`], the returned view outlives
    /// `self`, so sections can be chained through temporaries.
    #[must_use]
    pub fn sub_section(self, key: &str) -> Option<ConfigView<'a>> {
        self.entries
            .get(key)
            .and_then(ConfigValue::as_mapping)
            .map(ConfigView::new)
    }
}

impl ConfigAccess for ConfigView<'_> {
    fn as_map(&self) -> &ConfigMap {
        self.entries
    }
}
