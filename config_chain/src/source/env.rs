//! Environment-variable overlay.
//!
//! The overlay only ever *replaces* values: for each top-level key already
//! accumulated it looks up `<PREFIX>_<SNAKE_KEY>` (upper-cased) and, when set,
//! coerces the text into the kind already stored at that key. A value that
//! does not parse is stored as the raw string with a warning, so one malformed
//! override cannot fail the build. Variables that match no existing key are
//! ignored, and nested sections are never traversed.

use std::collections::BTreeMap;
use std::fmt;

use heck::ToSnakeCase;
use tracing::{debug, warn};
use uncased::{Uncased, UncasedStr};

use crate::coerce::coerce_literal;
use crate::error::ChainResult;
use crate::value::{ConfigMap, ConfigValue};

use super::Source;

/// Looks up environment variables by name.
///
/// The overlay takes this capability explicitly so tests can substitute a
/// fake environment instead of mutating process state. Closures of the form
/// `Fn(&str) -> Option<String>` implement it too.
pub trait EnvLookup: Send + Sync {
    /// Value of the variable `name`, if set and valid Unicode.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of variables with case-insensitive names.
///
/// # Examples
///
/// ```rust
/// use config_chain::{EnvLookup, StaticEnv};
///
/// let env = StaticEnv::new().with_var("APP_PORT", "9090");
/// assert_eq!(env.var("app_port").as_deref(), Some("9090"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticEnv {
    vars: BTreeMap<Uncased<'static>, String>,
}

impl StaticEnv {
    /// Create an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(Uncased::from(name.into()), value.into());
        self
    }
}

impl<K, V> FromIterator<(K, V)> for StaticEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |env, (name, value)| env.with_var(name, value))
    }
}

impl EnvLookup for StaticEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(UncasedStr::new(name)).cloned()
    }
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Converts a configuration key into the key part of a variable name.
pub type KeyCase = fn(&str) -> String;

fn snake_case(key: &str) -> String {
    key.to_snake_case()
}

/// Overrides existing top-level keys from prefixed environment variables.
///
/// # Examples
///
/// ```rust
/// use config_chain::{
///     ConfigAccess, EnvironmentOverlaySource, SourceChain, StaticEnv, StaticMapSource,
/// };
///
/// let defaults: StaticMapSource = [("listenPort", 8080_i64)].into_iter().collect();
/// let env = StaticEnv::new().with_var("APP_LISTEN_PORT", "9090");
/// let config = SourceChain::from_source(defaults)
///     .with(EnvironmentOverlaySource::new("app").with_env(env))
///     .build()?;
/// assert_eq!(config.get_integer("listenPort"), 9090);
/// # Ok::<_, std::sync::Arc<config_chain::ChainError>>(())
/// ```
pub struct EnvironmentOverlaySource {
    prefix: String,
    env: Box<dyn EnvLookup>,
    key_case: KeyCase,
}

impl EnvironmentOverlaySource {
    /// Create an overlay reading the process environment under `prefix`.
    ///
    /// The prefix is case-insensitive; trailing underscores are ignored so
    /// `"app"`, `"APP"` and `"APP_"` are equivalent.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.trim_end_matches('_').to_uppercase(),
            env: Box::new(ProcessEnv),
            key_case: snake_case,
        }
    }

    /// Replace the environment lookup.
    #[must_use]
    pub fn with_env(mut self, env: impl EnvLookup + 'static) -> Self {
        self.env = Box::new(env);
        self
    }

    /// Replace the key case conversion (snake case by default).
    #[must_use]
    pub fn with_key_case(mut self, key_case: KeyCase) -> Self {
        self.key_case = key_case;
        self
    }

    /// Normalised, upper-case prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Variable name consulted for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use config_chain::EnvironmentOverlaySource;
    ///
    /// let overlay = EnvironmentOverlaySource::new("go_utils");
    /// assert_eq!(overlay.variable_name("maxRetries"), "GO_UTILS_MAX_RETRIES");
    /// ```
    #[must_use]
    pub fn variable_name(&self, key: &str) -> String {
        let key_part = (self.key_case)(key).to_uppercase();
        if self.prefix.is_empty() {
            key_part
        } else {
            format!("{}_{key_part}", self.prefix)
        }
    }
}

impl fmt::Debug for EnvironmentOverlaySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentOverlaySource")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

impl Source for EnvironmentOverlaySource {
    fn load(&self, mut accumulated: ConfigMap) -> ChainResult<ConfigMap> {
        if accumulated.is_empty() {
            debug!(prefix = %self.prefix, "nothing accumulated to overlay");
            return Ok(accumulated);
        }
        for (key, current) in &mut accumulated {
            let variable = self.variable_name(key);
            let Some(raw) = self.env.var(&variable) else {
                continue;
            };
            if matches!(current, ConfigValue::Mapping(_)) {
                debug!(%key, %variable, "ignoring override of a nested section");
                continue;
            }
            let expected = current.kind();
            *current = coerce_literal(&raw, expected).unwrap_or_else(|| {
                warn!(
                    %key,
                    %variable,
                    %expected,
                    "environment override does not parse as the existing kind; using the raw string"
                );
                ConfigValue::String(raw)
            });
        }
        Ok(accumulated)
    }

    fn describe(&self) -> String {
        format!("environment overlay {}_*", self.prefix)
    }
}
