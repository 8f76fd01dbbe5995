//! Ordered source chains and the build fold.

use std::path::Path;

use tracing::debug;

use crate::error::ChainResult;
use crate::resolved::ResolvedConfig;
use crate::source::{DocumentSource, Source};
use crate::value::ConfigMap;

/// An ordered list of [`Source`]s.
///
/// Declaration order is the entire precedence model: a source declared later
/// overrides keys set by sources declared earlier. There is no separate
/// priority number.
///
/// # Examples
///
/// ```rust
/// use config_chain::{ConfigAccess, DocumentSource, SourceChain, StaticMapSource};
///
/// let defaults: StaticMapSource = [("app", "a")].into_iter().collect();
/// let config = SourceChain::from_source(defaults)
///     .with(DocumentSource::json(r#"{"app": "b"}"#))
///     .build()?;
/// assert_eq!(config.get_string("app"), "b");
/// # Ok::<_, std::sync::Arc<config_chain::ChainError>>(())
/// ```
#[derive(Debug, Default)]
pub struct SourceChain {
    sources: Vec<Box<dyn Source>>,
}

impl SourceChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chain whose first source is `source`.
    #[must_use]
    pub fn from_source(source: impl Source + 'static) -> Self {
        Self::new().with(source)
    }

    /// Append `source`, giving it precedence over everything declared so far.
    #[must_use]
    pub fn with(mut self, source: impl Source + 'static) -> Self {
        self.push(source);
        self
    }

    /// Append `source` in place.
    pub fn push(&mut self, source: impl Source + 'static) {
        self.sources.push(Box::new(source));
    }

    /// Append the document at `path` when it exists.
    ///
    /// A missing file is skipped, leaving the chain unchanged.
    ///
    /// # Errors
    ///
    /// Propagates [`DocumentSource::from_path`] failures: an unsupported
    /// extension or an unreadable file.
    pub fn with_file(self, path: impl AsRef<Path>) -> ChainResult<Self> {
        let path = path.as_ref();
        match DocumentSource::from_path(path)? {
            Some(source) => Ok(self.with(source)),
            None => {
                debug!(path = %path.display(), "skipping missing configuration file");
                Ok(self)
            }
        }
    }

    /// Number of declared sources.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Returns `true` when no source has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Resolve the chain into an immutable configuration.
    ///
    /// Starts from an empty mapping and applies every source in declaration
    /// order, one at a time. The chain itself is not modified, so building
    /// twice yields two independent configurations.
    ///
    /// # Errors
    ///
    /// Returns the first source error verbatim. No partial configuration is
    /// produced.
    pub fn build(&self) -> ChainResult<ResolvedConfig> {
        let resolved = self
            .sources
            .iter()
            .enumerate()
            .try_fold(ConfigMap::new(), |accumulated, (index, source)| {
                debug!(index, source = %source.describe(), "applying configuration source");
                source.load(accumulated).inspect_err(|err| {
                    debug!(index, source = %source.describe(), error = %err, "configuration source failed");
                })
            })?;
        debug!(keys = resolved.len(), "configuration resolved");
        Ok(ResolvedConfig::new(resolved))
    }
}
