//! Error types produced while building and reading configuration.

mod constructors;
mod types;

pub use types::{ChainError, TextLocation};

/// Result alias used throughout the crate.
///
/// Errors are reference counted so a failed build can be reported to several
/// callers without cloning the underlying parser error.
pub type ChainResult<T> = Result<T, std::sync::Arc<ChainError>>;

#[cfg(test)]
mod tests;
