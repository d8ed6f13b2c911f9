//! Error types raised while registering steps and resolving providers.
//!
//! Registration problems surface as [`StepError`] at the point a step is
//! declared, while failures that can only be detected when a step is matched
//! surface as [`LookupError`] from the host resolver.

mod ext;
mod types;

pub use ext::LookupResultExt;
pub use types::{LookupError, OptionsError, StepError};

/// Result alias for registration-time operations.
pub type StepResult<T> = Result<T, StepError>;

#[cfg(test)]
mod tests;
