//! Register Given/When/Then step phrases as named fixture providers.
//!
//! Step authors declare each step as an ordinary provider and bind it to a
//! phrase. When a feature file step is matched, the host resolver looks the
//! normalised phrase up by name in the test module, exactly as it would any
//! other fixture.
//!
//! ```
//! use step_fixtures::{FixtureLookupExt, PlainFunction, Request, StepKind, StepModule};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let steps = StepModule::new("blog::tests", "tests/blog.rs");
//!
//! steps
//!     .given("I have an article")
//!     .decorate(PlainFunction::new("article", |_| Ok(String::from("Hello"))))?;
//! steps.alias("I have a beautiful article", "article")?;
//! steps.then("the article is published").decorate(PlainFunction::new(
//!     "published",
//!     |req| Ok(!req.fixture::<String>("article")?.is_empty()),
//! ))?;
//!
//! let mut request = Request::new(steps);
//! let article = request.step(StepKind::Given, "Given I have a beautiful article")?;
//! assert_eq!(article.downcast::<String>().as_deref().map(String::as_str), Some("Hello"));
//! # Ok(())
//! # }
//! ```
//!
//! Modules are explicit handles. A test file usually keeps one in a
//! `static` built with [`step_module!`], and can either register through the
//! handle or enter it with [`StepModule::scope`] and use the free functions
//! [`given`], [`when`], [`then`] and [`alias`].

mod config;
mod error;
mod kind;
mod module;
mod normalise;
mod provider;
mod registrar;
mod request;
mod scope;
mod value;

pub use config::{DuplicatePolicy, ENV_PREFIX, RegistryOptions};
pub use error::{LookupError, LookupResultExt, OptionsError, StepError, StepResult};
pub use kind::{ParseStepKindError, StepKind};
pub use module::StepModule;
pub use normalise::{StepPhrase, normalise_phrase};
pub use provider::{Origin, PlainFunction, Provider, ProviderBody, StepFunction};
pub use registrar::{NotADecorator, StepDecorator, alias, given, then, when};
pub use request::{FixtureLookup, FixtureLookupExt, Request};
pub use scope::{ScopeGuard, caller_module, scope_depth};
pub use value::FixtureValue;

/// Create a [`StepModule`] for the module this macro is invoked in.
///
/// The module path and source file come from the call site, so each test
/// file gets a distinct namespace.
///
/// ```
/// use std::sync::LazyLock;
/// use step_fixtures::{StepModule, step_module};
///
/// static STEPS: LazyLock<StepModule> = LazyLock::new(|| step_module!());
///
/// assert_eq!(STEPS.file(), file!());
/// ```
#[macro_export]
macro_rules! step_module {
    () => {
        $crate::StepModule::new(::core::module_path!(), ::core::file!())
    };
    ($options:expr) => {
        $crate::StepModule::with_options(::core::module_path!(), ::core::file!(), $options)
    };
}
