//! Shared helpers for source tests along with focused submodules.

use crate::value::{ConfigMap, ConfigValue};


pub(super) fn map<const N: usize>(pairs: [(&str, ConfigValue); N]) -> ConfigMap {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}
