//! Declaring functions as resolver-visible providers.
//!
//! A step function starts life as a [`PlainFunction`]. Declaring it produces
//! a [`Provider`], which the host resolver can look up by name. The
//! [`StepFunction`] variant carries either form, so declaring twice is a
//! no-op by construction rather than by probing a marker.

use std::{any::Any, fmt, panic::Location, sync::Arc};

use crate::{
    error::LookupError,
    request::FixtureLookup,
    value::FixtureValue,
};

type ProviderFn = dyn Fn(&mut dyn FixtureLookup) -> Result<FixtureValue, LookupError> + Send + Sync;

/// Where a provider reports that it was defined.
///
/// Discovery only collects providers whose origin matches the module they
/// are installed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    module_path: String,
    file: String,
}

impl Origin {
    /// Build an origin from a module path and source file.
    #[must_use]
    pub fn new(module_path: impl Into<String>, file: impl Into<String>) -> Self {
        Self {
            module_path: module_path.into(),
            file: file.into(),
        }
    }

    /// Origin of the caller's source file. The module path is unknown until
    /// the provider is contributed to a module.
    #[must_use]
    #[track_caller]
    pub fn caller() -> Self {
        Self::new(String::new(), Location::caller().file())
    }

    /// Module path component.
    #[must_use]
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Source file component.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.module_path, self.file)
    }
}

fn erase<T, F>(func: F) -> Arc<ProviderFn>
where
    F: Fn(&mut dyn FixtureLookup) -> Result<T, LookupError> + Send + Sync + 'static,
    T: Any + Send + Sync,
{
    Arc::new(move |lookup: &mut dyn FixtureLookup| func(lookup).map(FixtureValue::new))
}

/// An ordinary named function that the resolver cannot see yet.
#[derive(Clone)]
pub struct PlainFunction {
    name: String,
    origin: Origin,
    body: Arc<ProviderFn>,
}

impl PlainFunction {
    /// Wrap `func` under `name`.
    ///
    /// The function receives the active fixture lookup so it can request
    /// its own dependencies by name.
    #[must_use]
    #[track_caller]
    pub fn new<T, F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut dyn FixtureLookup) -> Result<T, LookupError> + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        Self {
            name: name.into(),
            origin: Origin::caller(),
            body: erase(func),
        }
    }

    /// The function's own name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the function was defined.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Run the function against `lookup`.
    ///
    /// # Errors
    ///
    /// Propagates whatever the function returns.
    pub fn call(&self, lookup: &mut dyn FixtureLookup) -> Result<FixtureValue, LookupError> {
        (self.body)(lookup)
    }
}

impl fmt::Debug for PlainFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlainFunction")
            .field("name", &self.name)
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

/// What a provider does when resolved.
#[derive(Clone)]
pub enum ProviderBody {
    /// Run a function.
    Function(Arc<ProviderFn>),
    /// Resolve another provider by name in the current request.
    Alias(Arc<str>),
}

impl ProviderBody {
    /// Defer to the provider registered as `target`.
    #[must_use]
    pub fn lookup(target: &str) -> Self {
        Self::Alias(Arc::from(target))
    }

    /// Whether both bodies are the same allocation.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Function(lhs), Self::Function(rhs)) => Arc::ptr_eq(lhs, rhs),
            (Self::Alias(lhs), Self::Alias(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

impl fmt::Debug for ProviderBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => f.write_str("Function(..)"),
            Self::Alias(target) => f.debug_tuple("Alias").field(target).finish(),
        }
    }
}

/// A callable the host resolver can look up by name.
#[derive(Clone, Debug)]
pub struct Provider {
    name: String,
    origin: Origin,
    body: ProviderBody,
}

impl Provider {
    /// Declare `func` as a provider named `name`.
    #[must_use]
    #[track_caller]
    pub fn new<T, F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut dyn FixtureLookup) -> Result<T, LookupError> + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        Self::from_body(name, Origin::caller(), ProviderBody::Function(erase(func)))
    }

    /// A provider named `name` that resolves the existing provider `target`
    /// in the current request and returns its value.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_fixtures::Provider;
    ///
    /// let provider = Provider::alias("I have a beautiful article", "article");
    /// assert_eq!(provider.alias_target(), Some("article"));
    /// ```
    #[must_use]
    #[track_caller]
    pub fn alias(name: impl Into<String>, target: &str) -> Self {
        Self::from_body(name, Origin::caller(), ProviderBody::lookup(target))
    }

    /// Assemble a provider from its parts.
    #[must_use]
    pub fn from_body(name: impl Into<String>, origin: Origin, body: ProviderBody) -> Self {
        Self {
            name: name.into(),
            origin,
            body,
        }
    }

    /// The name the provider reports.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Where the provider reports it was defined.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// The provider's behaviour.
    #[must_use]
    pub const fn body(&self) -> &ProviderBody {
        &self.body
    }

    /// Target name when the provider defers to another provider.
    #[must_use]
    pub fn alias_target(&self) -> Option<&str> {
        match &self.body {
            ProviderBody::Alias(target) => Some(target.as_ref()),
            ProviderBody::Function(_) => None,
        }
    }

    /// Whether `other` runs the same body, regardless of name or origin.
    #[must_use]
    pub fn same_body(&self, other: &Self) -> bool {
        self.body.same_as(&other.body)
    }

    /// Rename the provider and claim `origin` as its definition site.
    #[must_use]
    pub(crate) fn relocate(self, name: &str, origin: &Origin) -> Self {
        Self {
            name: name.to_owned(),
            origin: origin.clone(),
            body: self.body,
        }
    }

    /// Resolve the provider against `lookup`.
    ///
    /// # Errors
    ///
    /// Propagates the body's failure, or the lookup failure of an alias
    /// target.
    pub fn call(&self, lookup: &mut dyn FixtureLookup) -> Result<FixtureValue, LookupError> {
        match &self.body {
            ProviderBody::Function(func) => func(lookup),
            ProviderBody::Alias(target) => lookup.fixture_value(target),
        }
    }
}

impl From<PlainFunction> for Provider {
    fn from(func: PlainFunction) -> Self {
        Self::from_body(func.name, func.origin, ProviderBody::Function(func.body))
    }
}

/// A step function before or after declaration.
#[derive(Clone, Debug)]
pub enum StepFunction {
    /// Not visible to the resolver.
    Plain(PlainFunction),
    /// Already a provider.
    Provider(Provider),
}

impl StepFunction {
    /// Promote to a provider. Providers are returned unchanged.
    #[must_use]
    pub fn declare(self) -> Provider {
        match self {
            Self::Plain(func) => func.into(),
            Self::Provider(provider) => provider,
        }
    }

    /// The function's own name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(func) => func.name(),
            Self::Provider(provider) => provider.name(),
        }
    }

    /// Whether the function is already resolver-visible.
    #[must_use]
    pub const fn is_provider(&self) -> bool {
        matches!(self, Self::Provider(_))
    }

    /// Body to run when the function is called directly.
    #[must_use]
    pub fn body(&self) -> ProviderBody {
        match self {
            Self::Plain(func) => ProviderBody::Function(Arc::clone(&func.body)),
            Self::Provider(provider) => provider.body.clone(),
        }
    }

    /// Run the function against `lookup`.
    ///
    /// # Errors
    ///
    /// Propagates the function's failure.
    pub fn call(&self, lookup: &mut dyn FixtureLookup) -> Result<FixtureValue, LookupError> {
        match self {
            Self::Plain(func) => func.call(lookup),
            Self::Provider(provider) => provider.call(lookup),
        }
    }
}

impl From<PlainFunction> for StepFunction {
    fn from(func: PlainFunction) -> Self {
        Self::Plain(func)
    }
}

impl From<Provider> for StepFunction {
    fn from(provider: Provider) -> Self {
        Self::Provider(provider)
    }
}
