//! Configuration sources.
//!
//! A [`Source`] receives the mapping accumulated by every source declared
//! before it and returns the updated mapping. Three implementations cover the
//! supported inputs:
//!
//! - [`DocumentSource`] parses JSON or YAML text and merges it in;
//! - [`StaticMapSource`] merges a pre-built in-memory mapping;
//! - [`EnvironmentOverlaySource`] overrides existing top-level keys from
//!   prefixed environment variables.

mod document;
mod env;
mod parser;
mod static_map;

pub use document::{DocumentFormat, DocumentSource};
pub use env::{EnvLookup, EnvironmentOverlaySource, KeyCase, ProcessEnv, StaticEnv};
pub use static_map::StaticMapSource;

use std::fmt;

use crate::error::ChainResult;
use crate::value::ConfigMap;

/// A unit that contributes or overlays configuration data.
///
/// Implementations must be deterministic with respect to their inputs: the
/// chain relies on applying sources one at a time, in declaration order, for
/// precedence.
pub trait Source: fmt::Debug + Send + Sync {
    /// Produce the updated mapping from everything accumulated so far.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::ChainError`] when the source's data cannot be
    /// parsed. The chain aborts the whole build on the first error.
    fn load(&self, accumulated: ConfigMap) -> ChainResult<ConfigMap>;

    /// Short human-readable description used in diagnostics.
    fn describe(&self) -> String;
}

#[cfg(test)]
mod tests;
