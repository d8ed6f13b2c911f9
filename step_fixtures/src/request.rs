//! The host resolver seam.
//!
//! [`FixtureLookup`] is the single operation step providers need from a host:
//! resolve a fixture by name within the current request. [`Request`] is a
//! small host implementation over a chain of [`StepModule`]s, enough to run
//! steps without an external test runner. It memoises each value for the
//! lifetime of the request and has no teardown or wider scopes.

use std::{any::Any, collections::HashMap, sync::Arc};

use tracing::{debug, trace};

use crate::{
    error::LookupError,
    kind::StepKind,
    module::StepModule,
    normalise::StepPhrase,
    value::FixtureValue,
};

/// Per-request named lookup supplied by the host resolver.
pub trait FixtureLookup {
    /// Resolve the fixture called `name`, reusing the value cached in the
    /// current request when there is one.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when no provider is registered under
    /// `name` in the active scope chain, or when the provider fails.
    fn fixture_value(&mut self, name: &str) -> Result<FixtureValue, LookupError>;
}

/// Typed access on top of [`FixtureLookup`].
pub trait FixtureLookupExt: FixtureLookup {
    /// Resolve `name` and downcast it to `T`.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::TypeMismatch`] when the provider produced a
    /// different type, or any error raised by the lookup itself.
    fn fixture<T>(&mut self, name: &str) -> Result<Arc<T>, LookupError>
    where
        T: Any + Send + Sync,
    {
        let value = self.fixture_value(name)?;
        value.downcast::<T>().ok_or_else(|| LookupError::TypeMismatch {
            name: name.to_owned(),
            expected: std::any::type_name::<T>(),
            found: value.type_name(),
        })
    }
}

impl<L: FixtureLookup + ?Sized> FixtureLookupExt for L {}

/// One request against a chain of step modules.
///
/// Lookups search the modules in order, innermost first, and the first
/// module holding the name wins.
///
/// # Examples
///
/// ```
/// use step_fixtures::{FixtureLookupExt, Provider, Request, StepModule};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let module = StepModule::new("blog::tests", "tests/blog.rs");
/// module.fixture(Provider::new("author", |_| Ok(String::from("ada"))))?;
/// module
///     .given("I am logged in")
///     .decorate(Provider::new("session", |req| {
///         let author = req.fixture::<String>("author")?;
///         Ok(format!("session for {author}"))
///     }))?;
///
/// let mut request = Request::new(module);
/// let session = request.fixture::<String>("I am logged in")?;
/// assert_eq!(session.as_str(), "session for ada");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Request {
    modules: Vec<StepModule>,
    cache: HashMap<String, FixtureValue>,
    resolving: Vec<String>,
}

impl Request {
    /// Start a request whose innermost module is `module`.
    #[must_use]
    pub fn new(module: StepModule) -> Self {
        Self {
            modules: vec![module],
            cache: HashMap::new(),
            resolving: Vec::new(),
        }
    }

    /// Append an outer module searched after those already in the chain.
    #[must_use]
    pub fn with_parent(mut self, module: StepModule) -> Self {
        self.modules.push(module);
        self
    }

    /// The module chain, innermost first.
    #[must_use]
    pub fn modules(&self) -> &[StepModule] {
        &self.modules
    }

    /// Whether `name` already has a value in this request.
    #[must_use]
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Resolve a feature-file step line.
    ///
    /// The line is normalised the same way phrases are at registration, so
    /// `"And I have an article"` reaches the `"I have an article"` step.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the phrase has no provider or its
    /// provider fails.
    pub fn step(&mut self, kind: StepKind, line: &str) -> Result<FixtureValue, LookupError> {
        let phrase = StepPhrase::new(line);
        debug!(%kind, %phrase, "matching step");
        self.fixture_value(phrase.as_str())
    }

    fn searched(&self) -> Vec<String> {
        self.modules
            .iter()
            .map(|module| module.module_path().to_owned())
            .collect()
    }
}

impl FixtureLookup for Request {
    fn fixture_value(&mut self, name: &str) -> Result<FixtureValue, LookupError> {
        if let Some(value) = self.cache.get(name) {
            trace!(name, "fixture cache hit");
            return Ok(value.clone());
        }
        if self.resolving.iter().any(|active| active == name) {
            let mut chain = self.resolving.clone();
            chain.push(name.to_owned());
            return Err(LookupError::Cycle {
                name: name.to_owned(),
                chain,
            });
        }
        let provider = self
            .modules
            .iter()
            .find_map(|module| module.get(name))
            .ok_or_else(|| LookupError::Unknown {
                name: name.to_owned(),
                searched: self.searched(),
            })?;

        self.resolving.push(name.to_owned());
        let outcome = provider.call(self);
        self.resolving.pop();

        let value = outcome?;
        self.cache.insert(name.to_owned(), value.clone());
        Ok(value)
    }
}
