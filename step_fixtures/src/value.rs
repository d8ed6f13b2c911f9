//! Type-erased fixture values shared within a request.

use std::{
    any::{Any, type_name},
    fmt,
    sync::Arc,
};

/// A resolved fixture value.
///
/// Values are reference counted so the request cache and every dependant
/// observe the same instance.
#[derive(Clone)]
pub struct FixtureValue {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl FixtureValue {
    /// Wrap `value`.
    #[must_use]
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared value without cloning it.
    #[must_use]
    pub fn from_arc<T>(value: Arc<T>) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            inner: value,
            type_name: type_name::<T>(),
        }
    }

    /// The value produced by steps that return nothing.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(())
    }

    /// Borrow the value as `T`, if it is one.
    #[must_use]
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Whether the value holds a `T`.
    #[must_use]
    pub fn is<T>(&self) -> bool
    where
        T: Any + Send + Sync,
    {
        self.inner.is::<T>()
    }

    /// Name of the wrapped type, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether both handles share the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for FixtureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixtureValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
