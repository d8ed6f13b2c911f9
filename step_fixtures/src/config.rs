//! Registry options.
//!
//! Re-registering a name in a module replaces the previous binding. That is
//! the default and matches how step modules are usually written, but it can
//! hide copy-paste mistakes, so a module can opt into warnings or outright
//! rejection. Options load from `STEP_FIXTURES_*` environment variables.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// Prefix for environment variables read by [`RegistryOptions::from_env`].
pub const ENV_PREFIX: &str = "STEP_FIXTURES_";

/// What happens when a name is registered twice in one module with a
/// different provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Replace the previous binding silently. Last write wins.
    #[default]
    Overwrite,
    /// Replace the previous binding and emit a warning.
    Warn,
    /// Keep the previous binding and fail the registration.
    Reject,
}

/// Options attached to a [`StepModule`](crate::StepModule).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistryOptions {
    /// Policy for duplicate registrations.
    pub duplicates: DuplicatePolicy,
}

impl RegistryOptions {
    /// Options with `policy` for duplicate registrations.
    #[must_use]
    pub const fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    /// Layer `STEP_FIXTURES_*` variables over the defaults.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load options from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError`] when a variable holds an unrecognised value,
    /// for example `STEP_FIXTURES_DUPLICATES=sometimes`.
    pub fn from_env() -> Result<Self, OptionsError> {
        Self::figment()
            .extract()
            .map_err(|err| OptionsError(Box::new(err)))
    }
}
