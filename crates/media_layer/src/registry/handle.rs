//! Canonical wrapper registry for handle-identified resources
//!
//! A registry maps each native handle to the single live wrapper for it,
//! per resource category. Entries are weak: resolving an event to a
//! resource is a relation, not an ownership transfer, and must never
//! extend the wrapper's lifetime or block its release.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use crate::error::{BindError, BindResult};
use crate::native::{NativeDriver, RawHandle, ResourceCategory};

/// State every handle-identified wrapper carries
///
/// Exactly one handle, one released flag, and the driver reference used
/// for the eventual native destroy call.
pub struct ResourceCore {
    driver: Arc<dyn NativeDriver>,
    category: ResourceCategory,
    handle: RawHandle,
    released: AtomicBool,
}

impl ResourceCore {
    pub(crate) fn new(
        driver: Arc<dyn NativeDriver>,
        category: ResourceCategory,
        handle: RawHandle,
    ) -> Self {
        Self {
            driver,
            category,
            handle,
            released: AtomicBool::new(false),
        }
    }

    /// The raw native handle, usable for identity even after release
    pub fn raw(&self) -> RawHandle {
        self.handle
    }

    /// The resource category this core belongs to
    pub fn category(&self) -> ResourceCategory {
        self.category
    }

    /// Whether the wrapper has been released
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::SeqCst)
    }

    /// The handle for passing across the native boundary
    ///
    /// Fails with [`BindError::UseAfterRelease`] once the wrapper has been
    /// released; every native forwarder goes through this gate.
    pub fn handle(&self) -> BindResult<RawHandle> {
        if self.is_released() {
            return Err(BindError::UseAfterRelease(self.category));
        }
        Ok(self.handle)
    }

    pub(crate) fn driver(&self) -> &Arc<dyn NativeDriver> {
        &self.driver
    }

    /// Set the released flag, returning whether it was already set.
    pub(crate) fn mark_released(&self) -> bool {
        self.released.swap(true, Ordering::SeqCst)
    }
}

/// Capability set every handle-identified resource implements
pub trait HandleResource: Send + Sync + Sized {
    /// The category this resource type belongs to
    const CATEGORY: ResourceCategory;

    /// Construct a wrapper for a handle seen for the first time
    fn adopt(driver: Arc<dyn NativeDriver>, handle: RawHandle) -> Self;

    /// The shared handle/release state
    fn core(&self) -> &ResourceCore;
}

/// Per-category cache mapping a handle to its canonical wrapper
///
/// Shared process-wide state; the mutex is held only for map mutation,
/// never across the native destroy call.
pub struct HandleRegistry<T> {
    driver: Arc<dyn NativeDriver>,
    entries: Mutex<HashMap<RawHandle, Weak<T>>>,
}

impl<T: HandleResource> HandleRegistry<T> {
    pub(crate) fn new(driver: Arc<dyn NativeDriver>) -> Self {
        Self {
            driver,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Return the canonical wrapper for `handle`, constructing and
    /// registering one if none is known
    ///
    /// Never returns two different instances for the same live handle.
    pub fn get_or_adopt(&self, handle: RawHandle) -> BindResult<Arc<T>> {
        if handle.is_null() {
            return Err(BindError::InvalidHandle(T::CATEGORY));
        }

        let mut entries = self.lock();
        if let Some(existing) = entries.get(&handle).and_then(Weak::upgrade) {
            return Ok(existing);
        }

        let wrapper = Arc::new(T::adopt(Arc::clone(&self.driver), handle));
        entries.insert(handle, Arc::downgrade(&wrapper));
        Ok(wrapper)
    }

    /// Return the registered wrapper for `handle`, or `None`
    ///
    /// Never constructs; used where adopting an unknown handle would be a
    /// protocol violation, such as resolving an event for a device this
    /// process never opened.
    pub fn get_existing(&self, handle: RawHandle) -> Option<Arc<T>> {
        if handle.is_null() {
            return None;
        }
        self.lock().get(&handle).and_then(Weak::upgrade)
    }

    /// Release the wrapper: native destroy exactly once, then entry
    /// removal
    ///
    /// A second release fails with [`BindError::UseAfterRelease`] and does
    /// not reach the native layer.
    pub fn release(&self, wrapper: &Arc<T>) -> BindResult<()> {
        let core = wrapper.core();
        if core.mark_released() {
            return Err(BindError::UseAfterRelease(T::CATEGORY));
        }

        // The destroy call may block; keep it outside the map lock.
        core.driver().destroy(T::CATEGORY, core.raw());
        self.lock().remove(&core.raw());
        Ok(())
    }

    /// Drop the entry for a resource the native layer already tore down
    ///
    /// Used by the device-removal dispatch path: the released flag is set
    /// so no further native destroy is attempted, but no destroy call is
    /// made here either.
    pub(crate) fn evict(&self, handle: RawHandle) {
        if let Some(wrapper) = self.lock().remove(&handle).and_then(|weak| weak.upgrade()) {
            let _ = wrapper.core().mark_released();
        }
    }

    /// Number of live entries currently registered
    pub fn len(&self) -> usize {
        let mut entries = self.lock();
        entries.retain(|_, weak| weak.strong_count() > 0);
        entries.len()
    }

    /// Whether no live entries are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<RawHandle, Weak<T>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

macro_rules! impl_handle_identity {
    ($ty:ident) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::registry::handle::HandleResource::core(self).raw()
                    == $crate::registry::handle::HandleResource::core(other).raw()
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::registry::handle::HandleResource::core(self)
                    .raw()
                    .hash(state);
            }
        }

        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let core = $crate::registry::handle::HandleResource::core(self);
                f.debug_struct(stringify!($ty))
                    .field("handle", &core.raw())
                    .field("released", &core.is_released())
                    .finish()
            }
        }
    };
}

pub(crate) use impl_handle_identity;
