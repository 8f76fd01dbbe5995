//! Test helpers shared across the workspace.
//!
//! - [`jail`] runs closures inside a [`figment::Jail`], which provides a
//!   scratch working directory and serialised, self-restoring access to
//!   process environment variables.
//! - [`fixtures`] holds the sample documents used by integration tests.

pub mod fixtures;
pub mod jail;

pub use jail::{jail_error, with_jail, write_file};
