//! Ordered configuration source chains.
//!
//! A [`SourceChain`] folds an ordered list of [`Source`]s (JSON/YAML
//! documents, static maps, and environment overlays) into one immutable
//! [`ResolvedConfig`]. Sources declared later override keys set by sources
//! declared earlier; the merge between them is shallow, so a nested section
//! always comes whole from the last source that declared it.
//!
//! ```rust
//! use config_chain::{
//!     ConfigAccess, DocumentSource, EnvironmentOverlaySource, SourceChain, StaticEnv,
//!     StaticMapSource,
//! };
//!
//! let defaults: StaticMapSource = [("port", 8080_i64)].into_iter().collect();
//! let config = SourceChain::from_source(defaults)
//!     .with(DocumentSource::yaml("app: demo\nport: 8000\n"))
//!     .with(EnvironmentOverlaySource::new("demo").with_env(StaticEnv::new().with_var("DEMO_PORT", "9090")))
//!     .build()?;
//!
//! assert_eq!(config.get_string("app"), "demo");
//! assert_eq!(config.get_integer("port"), 9090);
//! # Ok::<_, std::sync::Arc<config_chain::ChainError>>(())
//! ```

pub mod coerce;
mod chain;
mod error;
mod merge;
mod resolved;
mod source;
mod value;

pub use chain::SourceChain;
pub use error::{ChainError, ChainResult, TextLocation};
pub use merge::{merge, overlay};
pub use resolved::{ConfigAccess, ConfigView, ResolvedConfig};
pub use source::{
    DocumentFormat, DocumentSource, EnvLookup, EnvironmentOverlaySource, KeyCase, ProcessEnv,
    Source, StaticEnv, StaticMapSource,
};
pub use value::{ConfigMap, ConfigValue, ValueKind};
