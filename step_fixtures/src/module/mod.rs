//! Step modules: the namespaces step providers are contributed to.
//!
//! Each test file owns one [`StepModule`], usually created once with
//! [`step_module!`](crate::step_module) and held in a `static`. Registrations
//! write into the module's table; discovery reads it back.

mod contribute;

use std::{collections::BTreeMap, fmt, sync::Arc};

use parking_lot::RwLock;

use crate::{
    config::RegistryOptions,
    error::StepResult,
    provider::{Origin, Provider, StepFunction},
};

struct ModuleInner {
    origin: Origin,
    options: RegistryOptions,
    providers: RwLock<BTreeMap<String, Provider>>,
}

/// Handle to a test module's provider table.
///
/// Clones share the same table.
#[derive(Clone)]
pub struct StepModule {
    inner: Arc<ModuleInner>,
}

impl StepModule {
    /// Create an empty module with default options.
    #[must_use]
    pub fn new(module_path: impl Into<String>, file: impl Into<String>) -> Self {
        Self::with_options(module_path, file, RegistryOptions::default())
    }

    /// Create an empty module with `options`.
    #[must_use]
    pub fn with_options(
        module_path: impl Into<String>,
        file: impl Into<String>,
        options: RegistryOptions,
    ) -> Self {
        Self {
            inner: Arc::new(ModuleInner {
                origin: Origin::new(module_path, file),
                options,
                providers: RwLock::new(BTreeMap::new()),
            }),
        }
    }

    /// Rust module path the module stands for.
    #[must_use]
    pub fn module_path(&self) -> &str {
        self.inner.origin.module_path()
    }

    /// Source file the module stands for.
    #[must_use]
    pub fn file(&self) -> &str {
        self.inner.origin.file()
    }

    /// Origin stamped onto every contributed provider.
    #[must_use]
    pub fn origin(&self) -> &Origin {
        &self.inner.origin
    }

    /// Options the module was created with.
    #[must_use]
    pub fn options(&self) -> RegistryOptions {
        self.inner.options
    }

    /// Install `func` under its own name, declaring it first if needed.
    ///
    /// This is the registry equivalent of defining a fixture in the test
    /// file itself.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::DuplicateStep`](crate::StepError::DuplicateStep)
    /// when the module rejects duplicates and the name is taken.
    pub fn fixture(&self, func: impl Into<StepFunction>) -> StepResult<Provider> {
        let provider = func.into().declare();
        let name = provider.name().to_owned();
        self.contribute(&name, provider.clone())?;
        Ok(provider)
    }

    /// The provider bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Provider> {
        self.inner.providers.read().get(name).cloned()
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.inner.providers.read().contains_key(name)
    }

    /// Bound names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.inner.providers.read().keys().cloned().collect()
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.providers.read().len()
    }

    /// Whether nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.providers.read().is_empty()
    }

    /// Whether both handles refer to the same module.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for StepModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepModule")
            .field("origin", &self.inner.origin)
            .field("options", &self.inner.options)
            .field("names", &self.names())
            .finish()
    }
}
