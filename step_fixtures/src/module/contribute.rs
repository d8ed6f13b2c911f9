//! Installing providers into a module.
//!
//! A contributed provider is renamed to the attribute it is bound under and
//! re-stamped with the module's origin, so discovery treats it exactly like
//! a provider written in that module.

use tracing::{debug, warn};

use super::StepModule;
use crate::{
    config::DuplicatePolicy,
    error::{StepError, StepResult},
    provider::Provider,
};

impl StepModule {
    /// Bind `provider` as `name` in this module.
    ///
    /// Rebinding a name to the same provider body is always accepted.
    /// Rebinding it to a different body follows the module's
    /// [`DuplicatePolicy`]; by default the new binding replaces the old one.
    ///
    /// # Errors
    ///
    /// Returns [`StepError::DuplicateStep`] when the policy is
    /// [`DuplicatePolicy::Reject`] and `name` is bound to another body.
    pub fn contribute(&self, name: &str, provider: Provider) -> StepResult<()> {
        self.contribute_all(vec![(name.to_owned(), provider)])
    }

    /// Bind every `(name, provider)` pair, or none of them.
    ///
    /// All names are checked against the duplicate policy before anything
    /// is inserted.
    pub(crate) fn contribute_all(&self, bindings: Vec<(String, Provider)>) -> StepResult<()> {
        let relocated: Vec<(String, Provider)> = bindings
            .into_iter()
            .map(|(name, provider)| {
                let moved = provider.relocate(&name, &self.inner.origin);
                (name, moved)
            })
            .collect();
        let mut providers = self.inner.providers.write();
        for (name, provider) in &relocated {
            if let Some(existing) = providers.get(name)
                && !existing.same_body(provider)
            {
                self.on_duplicate(name)?;
            }
        }
        for (name, provider) in relocated {
            debug!(
                module = self.module_path(),
                name = name.as_str(),
                alias = provider.alias_target(),
                "contributed provider"
            );
            providers.insert(name, provider);
        }
        Ok(())
    }

    fn on_duplicate(&self, name: &str) -> StepResult<()> {
        match self.inner.options.duplicates {
            DuplicatePolicy::Overwrite => Ok(()),
            DuplicatePolicy::Warn => {
                warn!(module = self.module_path(), name, "replacing existing binding");
                Ok(())
            }
            DuplicatePolicy::Reject => Err(StepError::DuplicateStep {
                module: self.module_path().to_owned(),
                name: name.to_owned(),
            }),
        }
    }

    /// Providers discovery collects from this module.
    ///
    /// Only providers reporting this module as their origin are collected;
    /// everything installed through [`StepModule::contribute`] qualifies.
    #[must_use]
    pub fn collect(&self) -> Vec<Provider> {
        self.inner
            .providers
            .read()
            .values()
            .filter(|provider| provider.origin() == self.origin())
            .cloned()
            .collect()
    }
}
