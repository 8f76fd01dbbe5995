//! Helpers for working with `figment::Jail` in tests.
//!
//! A jail changes into a temporary directory and holds a global lock while
//! the closure runs; environment variables set through it are restored on
//! exit. That makes it the one safe place for tests to touch real files and
//! the real process environment.

use std::path::PathBuf;

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail cannot be set up or the closure fails.
///
/// # Examples
///
/// ```
/// use config_chain_test_helpers::with_jail;
///
/// let answer = with_jail(|jail| {
///     jail.set_env("DEMO_PORT", "9090");
///     Ok(std::env::var("DEMO_PORT").ok())
/// })?;
/// assert_eq!(answer.as_deref(), Some("9090"));
/// assert!(std::env::var("DEMO_PORT").is_err());
/// # Ok::<_, anyhow::Error>(())
/// ```
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Creates `name` with `contents` inside the jail and returns its absolute
/// path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_file(
    jail: &figment::Jail,
    name: &str,
    contents: &str,
) -> figment::error::Result<PathBuf> {
    jail.create_file(name, contents)?;
    Ok(jail.directory().join(name))
}

/// Converts any displayable error into a [`figment::Error`] so it can be
/// returned from a jail closure with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used as `map_err(jail_error)` on owned chain errors"
)]
pub fn jail_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
