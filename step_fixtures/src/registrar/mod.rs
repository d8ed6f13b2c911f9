//! Registering step phrases.
//!
//! A registration binds a normalised phrase in a [`StepModule`] to a
//! trampoline provider:
//!
//! - for `given`, the step function is declared as a provider, bound under
//!   its own name, and the trampoline resolves that name at match time, so
//!   the step and the fixture share one cached value per request (a phrase
//!   equal to the function name is answered by the provider itself);
//! - for `when` and `then`, the trampoline runs the function directly.
//!
//! Stacking registrations on one function is supported: each call only
//! reads the function. Registering a phrase that is already bound replaces
//! the earlier binding unless the module's options say otherwise.

use tracing::debug;

use crate::{
    error::{StepError, StepResult},
    kind::StepKind,
    module::StepModule,
    normalise::StepPhrase,
    provider::{Provider, ProviderBody, StepFunction},
    scope::caller_module,
};

/// Returned by the step entry points; applies the registration to a
/// function.
#[derive(Debug, Clone)]
#[must_use = "a step decorator registers nothing until `decorate` is called"]
pub struct StepDecorator {
    kind: StepKind,
    phrase: StepPhrase,
    module: StepModule,
}

impl StepDecorator {
    /// Kind of step being registered.
    #[must_use]
    pub const fn kind(&self) -> StepKind {
        self.kind
    }

    /// Normalised phrase the step is bound under.
    #[must_use]
    pub const fn phrase(&self) -> &StepPhrase {
        &self.phrase
    }

    /// Module receiving the registration.
    #[must_use]
    pub const fn module(&self) -> &StepModule {
        &self.module
    }

    /// Register `func` under the phrase and hand it back.
    ///
    /// Given steps return the declared provider so further registrations
    /// reuse it; other kinds return `func` unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::DuplicateStep`] when the module rejects
    /// duplicates and the phrase, or a given step's function name, is
    /// already bound to a different provider. A rejected registration binds
    /// nothing.
    pub fn decorate(&self, func: impl Into<StepFunction>) -> StepResult<StepFunction> {
        let step_fn = func.into();
        let phrase = self.phrase.as_str();
        let origin = self.module.origin().clone();
        let registered = if self.kind.promotes_function() {
            let provider = step_fn.declare();
            let name = provider.name().to_owned();
            let mut bindings = Vec::with_capacity(2);
            if name != phrase {
                let trampoline = Provider::from_body(phrase, origin, ProviderBody::lookup(&name));
                bindings.push((phrase.to_owned(), trampoline));
            }
            bindings.push((name, provider.clone()));
            self.module.contribute_all(bindings)?;
            StepFunction::Provider(provider)
        } else {
            let trampoline = Provider::from_body(phrase, origin, step_fn.body());
            self.module.contribute(phrase, trampoline)?;
            step_fn
        };

        debug!(
            module = self.module.module_path(),
            kind = %self.kind,
            phrase = %self.phrase,
            function = registered.name(),
            "registered step"
        );
        Ok(registered)
    }
}

/// Returned by alias registrations, which need no function.
///
/// Alias registrations happen immediately, so there is nothing to decorate;
/// [`NotADecorator::decorate`] always fails.
#[derive(Debug, Clone)]
pub struct NotADecorator {
    phrase: StepPhrase,
}

impl NotADecorator {
    /// Phrase the alias was registered under.
    #[must_use]
    pub const fn phrase(&self) -> &StepPhrase {
        &self.phrase
    }

    /// Reject an attempt to decorate `func`.
    ///
    /// # Errors
    ///
    /// Always returns [`StepError::AliasUsedAsDecorator`].
    pub fn decorate(&self, func: impl Into<StepFunction>) -> StepResult<StepFunction> {
        Err(StepError::AliasUsedAsDecorator {
            phrase: self.phrase.to_string(),
            function: func.into().name().to_owned(),
        })
    }
}

impl StepModule {
    /// Start registering a step of `kind` under `phrase`.
    pub fn step(&self, kind: StepKind, phrase: &str) -> StepDecorator {
        StepDecorator {
            kind,
            phrase: StepPhrase::new(phrase),
            module: self.clone(),
        }
    }

    /// Start registering a given step.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_fixtures::{FixtureLookupExt, PlainFunction, Request, StepModule};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let module = StepModule::new("blog::tests", "tests/blog.rs");
    /// let article = PlainFunction::new("article", |_| Ok(String::from("Hello")));
    /// let article = module.given("I have an article").decorate(article)?;
    /// module.given("there is an article").decorate(article)?;
    ///
    /// let mut request = Request::new(module);
    /// let first = request.fixture::<String>("I have an article")?;
    /// let second = request.fixture::<String>("there is an article")?;
    /// assert!(std::sync::Arc::ptr_eq(&first, &second));
    /// # Ok(())
    /// # }
    /// ```
    pub fn given(&self, phrase: &str) -> StepDecorator {
        self.step(StepKind::Given, phrase)
    }

    /// Start registering a when step.
    pub fn when(&self, phrase: &str) -> StepDecorator {
        self.step(StepKind::When, phrase)
    }

    /// Start registering a then step.
    pub fn then(&self, phrase: &str) -> StepDecorator {
        self.step(StepKind::Then, phrase)
    }

    /// Bind `phrase` to the existing fixture `fixture`.
    ///
    /// Resolving the phrase yields the same value as resolving `fixture` in
    /// the same request. The fixture is only looked up at match time, so it
    /// may be defined after the alias or in an outer module.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::DuplicateStep`] when the module rejects
    /// duplicates and `phrase` is already bound.
    pub fn alias(&self, phrase: &str, fixture: &str) -> StepResult<NotADecorator> {
        let normalised = StepPhrase::new(phrase);
        self.contribute(
            normalised.as_str(),
            Provider::from_body(
                normalised.as_str(),
                self.origin().clone(),
                ProviderBody::lookup(fixture),
            ),
        )?;
        debug!(
            module = self.module_path(),
            phrase = %normalised,
            fixture,
            "registered fixture alias"
        );
        Ok(NotADecorator { phrase: normalised })
    }
}

/// Register a given step in the innermost entered module.
///
/// # Errors
///
/// Returns [`StepError::NoEnclosingModule`] when no module is entered.
pub fn given(phrase: &str) -> StepResult<StepDecorator> {
    Ok(caller_module(0)?.given(phrase))
}

/// Register a when step in the innermost entered module.
///
/// # Errors
///
/// Returns [`StepError::NoEnclosingModule`] when no module is entered.
pub fn when(phrase: &str) -> StepResult<StepDecorator> {
    Ok(caller_module(0)?.when(phrase))
}

/// Register a then step in the innermost entered module.
///
/// # Errors
///
/// Returns [`StepError::NoEnclosingModule`] when no module is entered.
pub fn then(phrase: &str) -> StepResult<StepDecorator> {
    Ok(caller_module(0)?.then(phrase))
}

/// Bind `phrase` to the existing fixture `fixture` in the innermost entered
/// module.
///
/// # Errors
///
/// Returns [`StepError::NoEnclosingModule`] when no module is entered, or
/// [`StepError::DuplicateStep`] as for [`StepModule::alias`].
pub fn alias(phrase: &str, fixture: &str) -> StepResult<NotADecorator> {
    caller_module(0)?.alias(phrase, fixture)
}
