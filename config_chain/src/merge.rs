//! Shallow, right-biased mapping merge.
//!
//! The merge deliberately does **not** recurse. When both sides hold a nested
//! mapping under the same key, the incoming mapping replaces the base one
//! wholesale, so keys present only in the base's nested mapping are lost:
//!
//! ```rust
//! use config_chain::{ConfigMap, ConfigValue, merge};
//!
//! let nested = |pairs: &[(&str, i64)]| {
//!     ConfigValue::Mapping(
//!         pairs
//!             .iter()
//!             .map(|(k, v)| ((*k).to_owned(), ConfigValue::Integer(*v)))
//!             .collect(),
//!     )
//! };
//! let base = ConfigMap::from([("s".to_owned(), nested(&[("x", 1), ("y", 2)]))]);
//! let incoming = ConfigMap::from([("s".to_owned(), nested(&[("y", 9)]))]);
//!
//! let merged = merge(&base, &incoming);
//! assert_eq!(merged.get("s"), Some(&nested(&[("y", 9)])));
//! ```
//!
//! Sub-sections therefore come from exactly one source: whichever source
//! declared the section last.

use crate::value::ConfigMap;

/// Merge `incoming` over `base`, returning a new mapping.
///
/// Every key of `base` is kept unless `incoming` holds the same key, in
/// which case the incoming value wins. An empty operand is the identity, so
/// `merge(m, {}) == m` and `merge({}, m) == m`.
#[must_use]
pub fn merge(base: &ConfigMap, incoming: &ConfigMap) -> ConfigMap {
    let mut merged = base.clone();
    overlay(&mut merged, incoming.clone());
    merged
}

/// Overlay `incoming` onto `target` in place.
///
/// This is the consuming form of [`merge`] used while folding sources, where
/// the accumulated mapping is owned by the build and need not be copied.
pub fn overlay(target: &mut ConfigMap, incoming: ConfigMap) {
    if target.is_empty() {
        *target = incoming;
        return;
    }
    target.extend(incoming);
}
