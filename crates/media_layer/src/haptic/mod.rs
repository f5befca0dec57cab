//! Haptic feedback devices
//!
//! Haptics report no events of their own; the wrapper exists for identity
//! and release semantics, with effect playback living in forwarding layers
//! outside this crate.

use std::sync::Arc;

use crate::error::BindResult;
use crate::native::{NativeDriver, RawHandle, ResourceCategory};
use crate::registry::handle::{impl_handle_identity, HandleResource, ResourceCore};

/// An opened haptic device
pub struct Haptic {
    core: ResourceCore,
}

impl Haptic {
    /// The native handle, for passing to forwarding layers
    pub fn handle(&self) -> BindResult<RawHandle> {
        self.core.handle()
    }

    /// Whether this device has been released
    pub fn is_released(&self) -> bool {
        self.core.is_released()
    }
}

impl HandleResource for Haptic {
    const CATEGORY: ResourceCategory = ResourceCategory::Haptic;

    fn adopt(driver: Arc<dyn NativeDriver>, handle: RawHandle) -> Self {
        Self {
            core: ResourceCore::new(driver, Self::CATEGORY, handle),
        }
    }

    fn core(&self) -> &ResourceCore {
        &self.core
    }
}

impl_handle_identity!(Haptic);
