//! Game controllers (joysticks with a standard mapping)

use std::sync::Arc;

use crate::error::BindResult;
use crate::events::CommonEvent;
use crate::foundation::Signal;
use crate::native::event::{ControllerAxis, ControllerButton};
use crate::native::{NativeDriver, RawHandle, ResourceCategory};
use crate::registry::handle::{impl_handle_identity, HandleResource, ResourceCore};

/// Mapped axis motion payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerAxisEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// The mapped axis
    pub axis: ControllerAxis,
    /// Axis position
    pub value: i16,
}

/// Mapped button press/release payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerButtonEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// The mapped button
    pub button: ControllerButton,
}

/// An opened game controller
pub struct GameController {
    core: ResourceCore,
    /// Fires on mapped axis motion
    pub axis_motion: Signal<ControllerAxisEvent>,
    /// Fires when a mapped button is pressed
    pub button_down: Signal<ControllerButtonEvent>,
    /// Fires when a mapped button is released
    pub button_up: Signal<ControllerButtonEvent>,
    /// Fires when the controller's mapping is updated
    pub remapped: Signal<CommonEvent>,
    /// Fires when the device is disconnected; best-effort cleanup
    /// notification, the wrapper may already be invalid for further
    /// native calls
    pub removed: Signal<CommonEvent>,
}

impl GameController {
    /// The native handle, for passing to forwarding layers
    pub fn handle(&self) -> BindResult<RawHandle> {
        self.core.handle()
    }

    /// Whether this controller has been released or reported removed
    pub fn is_released(&self) -> bool {
        self.core.is_released()
    }
}

impl HandleResource for GameController {
    const CATEGORY: ResourceCategory = ResourceCategory::GameController;

    fn adopt(driver: Arc<dyn NativeDriver>, handle: RawHandle) -> Self {
        Self {
            core: ResourceCore::new(driver, Self::CATEGORY, handle),
            axis_motion: Signal::new(),
            button_down: Signal::new(),
            button_up: Signal::new(),
            remapped: Signal::new(),
            removed: Signal::new(),
        }
    }

    fn core(&self) -> &ResourceCore {
        &self.core
    }
}

impl_handle_identity!(GameController);
