//! Touch input devices

use std::sync::Arc;

use crate::error::BindResult;
use crate::foundation::Signal;
use crate::native::{NativeDriver, RawHandle, ResourceCategory};
use crate::registry::handle::{impl_handle_identity, HandleResource, ResourceCore};

/// Finger contact payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Native finger id
    pub finger: i64,
    /// Normalized X position
    pub x: f32,
    /// Normalized Y position
    pub y: f32,
    /// Normalized X motion
    pub dx: f32,
    /// Normalized Y motion
    pub dy: f32,
    /// Normalized pressure
    pub pressure: f32,
}

/// An opened touch device
///
/// Gestures are not addressed to a device wrapper; they fire on the
/// process-wide hub carrying the raw touch handle.
pub struct TouchDevice {
    core: ResourceCore,
    /// Fires when a finger touches the device
    pub finger_down: Signal<FingerEvent>,
    /// Fires when a finger leaves the device
    pub finger_up: Signal<FingerEvent>,
    /// Fires when a finger moves on the device
    pub finger_motion: Signal<FingerEvent>,
}

impl TouchDevice {
    /// The native handle, for passing to forwarding layers
    pub fn handle(&self) -> BindResult<RawHandle> {
        self.core.handle()
    }

    /// Whether this touch device has been released
    pub fn is_released(&self) -> bool {
        self.core.is_released()
    }
}

impl HandleResource for TouchDevice {
    const CATEGORY: ResourceCategory = ResourceCategory::TouchDevice;

    fn adopt(driver: Arc<dyn NativeDriver>, handle: RawHandle) -> Self {
        Self {
            core: ResourceCore::new(driver, Self::CATEGORY, handle),
            finger_down: Signal::new(),
            finger_up: Signal::new(),
            finger_motion: Signal::new(),
        }
    }

    fn core(&self) -> &ResourceCore {
        &self.core
    }
}

impl_handle_identity!(TouchDevice);
