//! Extension for mapping provider failures into [`LookupError`].
//!
//! Provider bodies frequently call APIs with their own error types; this
//! helper removes the repeated
//! `.map_err(|e| LookupError::provider_failed(name, e))` at those call sites.
//!
//! # Examples
//!
//! ```
//! use step_fixtures::{LookupError, LookupResultExt};
//!
//! fn parse_id(raw: &str) -> Result<u32, LookupError> {
//!     raw.parse::<u32>().into_lookup("article_id")
//! }
//!
//! assert!(parse_id("7").is_ok());
//! assert!(matches!(parse_id("x"), Err(LookupError::ProviderFailed { .. })));
//! ```

use std::error::Error as StdError;

use super::LookupError;

/// Convert any `Result<T, E>` into a fixture lookup result.
pub trait LookupResultExt<T> {
    /// Wrap the error as a [`LookupError::ProviderFailed`] for `name`.
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in [`LookupError::ProviderFailed`].
    fn into_lookup(self, name: &str) -> Result<T, LookupError>;
}

impl<T, E> LookupResultExt<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn into_lookup(self, name: &str) -> Result<T, LookupError> {
        self.map_err(|err| LookupError::provider_failed(name, err))
    }
}
