//! In-memory mapping source.

use crate::error::ChainResult;
use crate::merge::overlay;
use crate::value::{ConfigMap, ConfigValue};

use super::Source;

/// Merges a caller-supplied mapping over the accumulated configuration.
///
/// # Examples
///
/// ```rust
/// use config_chain::{ConfigAccess, SourceChain, StaticMapSource};
///
/// let defaults: StaticMapSource = [("app", "demo"), ("mode", "local")].into_iter().collect();
/// let config = SourceChain::from_source(defaults).build()?;
/// assert_eq!(config.get_string("mode"), "local");
/// # Ok::<_, std::sync::Arc<config_chain::ChainError>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticMapSource {
    map: ConfigMap,
}

impl StaticMapSource {
    /// Wrap `map`.
    #[must_use]
    pub const fn new(map: ConfigMap) -> Self {
        Self { map }
    }

    /// Borrow the wrapped mapping.
    #[must_use]
    pub const fn as_map(&self) -> &ConfigMap {
        &self.map
    }
}

impl From<ConfigMap> for StaticMapSource {
    fn from(map: ConfigMap) -> Self {
        Self::new(map)
    }
}

impl<K, V> FromIterator<(K, V)> for StaticMapSource
where
    K: Into<String>,
    V: Into<ConfigValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl Source for StaticMapSource {
    fn load(&self, mut accumulated: ConfigMap) -> ChainResult<ConfigMap> {
        overlay(&mut accumulated, self.map.clone());
        Ok(accumulated)
    }

    fn describe(&self) -> String {
        format!("static map ({} keys)", self.map.len())
    }
}
