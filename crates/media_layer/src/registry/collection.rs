//! Lazy view over a native count-plus-indexed-accessor enumeration
//!
//! The count is re-queried on every access because it can change between
//! calls (device hot-plug). Materialized elements are cached until the
//! owner explicitly forces a refresh; the binding layer cannot observe
//! native-side mutation, so cached entries may describe devices that have
//! since been rescanned. Callers that need current data call
//! [`LazyCollection::refresh`] first.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{BindError, BindResult};

type CountFn = Box<dyn Fn() -> usize + Send + Sync>;
type FetchFn<T> = Box<dyn Fn(usize) -> BindResult<T> + Send + Sync>;

/// Read-only, order-preserving, positionally-indexed view over a native
/// enumeration
pub struct LazyCollection<T> {
    count: CountFn,
    fetch: FetchFn<T>,
    cache: Mutex<Vec<Option<T>>>,
}

impl<T: Clone> LazyCollection<T> {
    /// Build a view from a native count accessor and an indexed accessor
    pub fn new(
        count: impl Fn() -> usize + Send + Sync + 'static,
        fetch: impl Fn(usize) -> BindResult<T> + Send + Sync + 'static,
    ) -> Self {
        Self {
            count: Box::new(count),
            fetch: Box::new(fetch),
            cache: Mutex::new(Vec::new()),
        }
    }

    /// The current native count; forwarded on every call
    pub fn count(&self) -> usize {
        (self.count)()
    }

    /// The element at `index`, materializing and caching it on first
    /// access
    ///
    /// Fails with [`BindError::IndexOutOfRange`] when `index` is at or
    /// beyond the current count.
    pub fn at(&self, index: usize) -> BindResult<T> {
        let count = self.count();
        if index >= count {
            return Err(BindError::IndexOutOfRange { index, count });
        }

        let mut cache = self.lock();
        if cache.len() < count {
            cache.resize_with(count, || None);
        }
        if let Some(cached) = &cache[index] {
            return Ok(cached.clone());
        }

        let value = (self.fetch)(index)?;
        cache[index] = Some(value.clone());
        Ok(value)
    }

    /// Drop every cached element so the next access re-materializes
    ///
    /// Never happens automatically; hot-plug is only reflected in already
    /// materialized positions after an explicit refresh.
    pub fn refresh(&self) {
        self.lock().clear();
    }

    /// Lazily enumerate the collection
    ///
    /// The count is read when enumeration starts, not snapshotted earlier;
    /// two enumerations started at different times may observe different
    /// lengths and contents. The sequence is finite and restartable.
    pub fn iter(&self) -> impl Iterator<Item = BindResult<T>> + '_ {
        (0..self.count()).map(move |index| self.at(index))
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Option<T>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
