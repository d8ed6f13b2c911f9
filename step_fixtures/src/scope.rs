//! Which module a registration belongs to.
//!
//! Registrations made through a [`StepModule`] handle name their module
//! directly. The free functions ([`given`](crate::given) and friends) instead
//! consult a per-thread stack of entered modules: entering a module pushes
//! it, dropping the guard pops it. Helpers called while a module is entered
//! therefore register into that module however deeply they are nested.

use std::{cell::RefCell, marker::PhantomData};

use crate::{
    error::{StepError, StepResult},
    module::StepModule,
};

thread_local! {
    static ENTERED: RefCell<Vec<StepModule>> = const { RefCell::new(Vec::new()) };
}

/// Keeps a module entered until dropped.
#[must_use = "dropping the guard leaves the module"]
#[derive(Debug)]
pub struct ScopeGuard {
    module: StepModule,
    // Scopes are per thread; the guard must be dropped where it was made.
    _thread_bound: PhantomData<*const ()>,
}

impl ScopeGuard {
    /// The entered module.
    #[must_use]
    pub const fn module(&self) -> &StepModule {
        &self.module
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        ENTERED.with_borrow_mut(|stack| {
            if let Some(pos) = stack.iter().rposition(|m| m.ptr_eq(&self.module)) {
                stack.remove(pos);
            }
        });
    }
}

impl StepModule {
    /// Enter this module on the current thread.
    pub fn enter(&self) -> ScopeGuard {
        ENTERED.with_borrow_mut(|stack| stack.push(self.clone()));
        ScopeGuard {
            module: self.clone(),
            _thread_bound: PhantomData,
        }
    }

    /// Run `f` with this module entered.
    ///
    /// # Examples
    ///
    /// ```
    /// use step_fixtures::{PlainFunction, StepModule, when};
    ///
    /// # fn main() -> Result<(), step_fixtures::StepError> {
    /// let module = StepModule::new("blog::tests", "tests/blog.rs");
    /// module.scope(|| {
    ///     when("I open the article")?.decorate(PlainFunction::new("open", |_| Ok(())))
    /// })?;
    /// assert!(module.contains("I open the article"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn scope<R>(&self, f: impl FnOnce() -> R) -> R {
        let _guard = self.enter();
        f()
    }
}

/// The module `depth` levels out from the innermost entered module.
///
/// Depth `0` is the innermost module.
///
/// # Errors
///
/// Returns [`StepError::NoEnclosingModule`] when fewer than `depth + 1`
/// modules are entered on this thread.
pub fn caller_module(depth: usize) -> StepResult<StepModule> {
    ENTERED
        .with_borrow(|stack| stack.iter().rev().nth(depth).cloned())
        .ok_or(StepError::NoEnclosingModule { depth })
}

/// Number of modules entered on this thread.
#[must_use]
pub fn scope_depth() -> usize {
    ENTERED.with_borrow(Vec::len)
}
