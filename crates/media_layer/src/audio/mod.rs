//! Audio devices and decoder enumeration
//!
//! Playback and capture devices are opened from their position in the
//! corresponding enumeration ([`crate::native::DeviceClass::AudioPlayback`]
//! or [`crate::native::DeviceClass::AudioCapture`]); available decoders are
//! enumeration-only and never become handle resources.

use std::sync::Arc;

use crate::error::BindResult;
use crate::events::CommonEvent;
use crate::foundation::Signal;
use crate::native::{NativeDriver, RawHandle, ResourceCategory};
use crate::registry::handle::{impl_handle_identity, HandleResource, ResourceCore};

/// An opened audio playback or capture device
pub struct AudioDevice {
    core: ResourceCore,
    /// Fires when the device is disconnected; best-effort cleanup
    /// notification, the wrapper may already be invalid for further
    /// native calls
    pub removed: Signal<CommonEvent>,
}

impl AudioDevice {
    /// The native handle, for passing to forwarding layers
    pub fn handle(&self) -> BindResult<RawHandle> {
        self.core.handle()
    }

    /// Whether this device has been released or reported removed
    pub fn is_released(&self) -> bool {
        self.core.is_released()
    }
}

impl HandleResource for AudioDevice {
    const CATEGORY: ResourceCategory = ResourceCategory::AudioDevice;

    fn adopt(driver: Arc<dyn NativeDriver>, handle: RawHandle) -> Self {
        Self {
            core: ResourceCore::new(driver, Self::CATEGORY, handle),
            removed: Signal::new(),
        }
    }

    fn core(&self) -> &ResourceCore {
        &self.core
    }
}

impl_handle_identity!(AudioDevice);
