//! Joystick devices

use std::sync::Arc;

use crate::error::BindResult;
use crate::events::CommonEvent;
use crate::foundation::Signal;
use crate::native::event::HatState;
use crate::native::{NativeDriver, RawHandle, ResourceCategory};
use crate::registry::handle::{impl_handle_identity, HandleResource, ResourceCore};

/// Axis motion payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyAxisEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Axis index
    pub axis: u8,
    /// Axis position
    pub value: i16,
}

/// Trackball motion payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyBallEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Ball index
    pub ball: u8,
    /// Relative X motion
    pub dx: i16,
    /// Relative Y motion
    pub dy: i16,
}

/// Hat motion payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyHatEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Hat index
    pub hat: u8,
    /// New hat position
    pub state: HatState,
}

/// Button press/release payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoyButtonEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// Button index
    pub button: u8,
}

/// An opened joystick
///
/// Joysticks this process never opened have no wrapper; their events are
/// dropped during dispatch. Connection of new devices fires
/// [`crate::events::EventHub::joystick_added`] with the device index.
pub struct Joystick {
    core: ResourceCore,
    /// Fires on axis motion
    pub axis_motion: Signal<JoyAxisEvent>,
    /// Fires on trackball motion
    pub ball_motion: Signal<JoyBallEvent>,
    /// Fires on hat motion
    pub hat_motion: Signal<JoyHatEvent>,
    /// Fires when a button is pressed
    pub button_down: Signal<JoyButtonEvent>,
    /// Fires when a button is released
    pub button_up: Signal<JoyButtonEvent>,
    /// Fires when the device is disconnected; the wrapper may already be
    /// invalid for further native calls, so treat this as a best-effort
    /// cleanup notification
    pub removed: Signal<CommonEvent>,
}

impl Joystick {
    /// The native handle, for passing to forwarding layers
    pub fn handle(&self) -> BindResult<RawHandle> {
        self.core.handle()
    }

    /// Whether this joystick has been released or reported removed
    pub fn is_released(&self) -> bool {
        self.core.is_released()
    }
}

impl HandleResource for Joystick {
    const CATEGORY: ResourceCategory = ResourceCategory::Joystick;

    fn adopt(driver: Arc<dyn NativeDriver>, handle: RawHandle) -> Self {
        Self {
            core: ResourceCore::new(driver, Self::CATEGORY, handle),
            axis_motion: Signal::new(),
            ball_motion: Signal::new(),
            hat_motion: Signal::new(),
            button_down: Signal::new(),
            button_up: Signal::new(),
            removed: Signal::new(),
        }
    }

    fn core(&self) -> &ResourceCore {
        &self.core
    }
}

impl_handle_identity!(Joystick);
