//! Error enums for step registration and fixture lookup.

use std::error::Error as StdError;

use thiserror::Error;

/// Configuration errors raised while registering steps.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StepError {
    /// The value returned by an alias registration was used as a decorator.
    #[error(
        "cannot decorate `{function}`: step '{phrase}' reuses an existing fixture \
         and cannot be used as a decorator"
    )]
    AliasUsedAsDecorator {
        /// Normalised phrase the alias was registered under.
        phrase: String,
        /// Name of the function that was passed to the sentinel.
        function: String,
    },

    /// No step module was in scope at the requested depth.
    #[error(
        "no step module is in scope at depth {depth}; enter one with \
         `StepModule::scope` or register through the module handle"
    )]
    NoEnclosingModule {
        /// Depth requested from the innermost entered scope.
        depth: usize,
    },

    /// A different provider is already bound to the name and the module
    /// rejects duplicates.
    #[error("'{name}' is already registered in module '{module}'")]
    DuplicateStep {
        /// Module path of the target namespace.
        module: String,
        /// Attribute name that was registered twice.
        name: String,
    },
}

/// Errors raised by the host resolver while looking up a fixture by name.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LookupError {
    /// No provider with the name exists in the active scope chain.
    #[error("fixture '{name}' not found; searched: {}", .searched.join(", "))]
    Unknown {
        /// Requested fixture name.
        name: String,
        /// Module paths searched, innermost first.
        searched: Vec<String>,
    },

    /// Resolving the fixture requires the fixture itself.
    #[error("recursive dependency on fixture '{name}': {}", .chain.join(" -> "))]
    Cycle {
        /// Fixture that closed the cycle.
        name: String,
        /// Resolution chain ending with `name`.
        chain: Vec<String>,
    },

    /// The fixture resolved, but to a value of another type.
    #[error("fixture '{name}' is a {found}, not a {expected}")]
    TypeMismatch {
        /// Requested fixture name.
        name: String,
        /// Type the caller asked for.
        expected: &'static str,
        /// Type the provider produced.
        found: &'static str,
    },

    /// The provider ran and reported a failure of its own.
    #[error("fixture '{name}' failed: {source}")]
    ProviderFailed {
        /// Fixture whose provider failed.
        name: String,
        /// Underlying provider error.
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl LookupError {
    /// Construct a [`LookupError::ProviderFailed`] for `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_fixtures::LookupError;
    ///
    /// let err = LookupError::provider_failed("article", "database offline");
    /// assert_eq!(err.to_string(), "fixture 'article' failed: database offline");
    /// ```
    #[must_use]
    pub fn provider_failed(
        name: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self::ProviderFailed {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Name of the fixture the error refers to.
    #[must_use]
    pub fn fixture_name(&self) -> &str {
        match self {
            Self::Unknown { name, .. }
            | Self::Cycle { name, .. }
            | Self::TypeMismatch { name, .. }
            | Self::ProviderFailed { name, .. } => name,
        }
    }
}

/// Invalid registry options supplied through the environment.
#[derive(Debug, Error)]
#[error("invalid step registry options: {0}")]
pub struct OptionsError(#[source] pub(crate) Box<figment::Error>);
