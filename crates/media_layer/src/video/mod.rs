//! Windows and displays

use std::sync::Arc;

use crate::error::BindResult;
use crate::foundation::Signal;
use crate::native::{NativeDriver, RawHandle, ResourceCategory};
use crate::registry::handle::{impl_handle_identity, HandleResource, ResourceCore};

pub use crate::native::event::WindowDetail;

/// Per-window notification payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowEvent {
    /// Milliseconds since native library initialization
    pub timestamp: u32,
    /// What happened to the window
    pub detail: WindowDetail,
}

/// A top-level window
///
/// The canonical wrapper for one native window handle. Platform-specific
/// system window messages never reach a window instance; they fire only on
/// [`crate::events::EventHub::system_window_message`].
pub struct Window {
    core: ResourceCore,
    /// Fires for every state change of this window
    pub events: Signal<WindowEvent>,
}

impl Window {
    /// The native handle, for passing to forwarding layers
    pub fn handle(&self) -> BindResult<RawHandle> {
        self.core.handle()
    }

    /// Whether this window has been released
    pub fn is_released(&self) -> bool {
        self.core.is_released()
    }
}

impl HandleResource for Window {
    const CATEGORY: ResourceCategory = ResourceCategory::Window;

    fn adopt(driver: Arc<dyn NativeDriver>, handle: RawHandle) -> Self {
        Self {
            core: ResourceCore::new(driver, Self::CATEGORY, handle),
            events: Signal::new(),
        }
    }

    fn core(&self) -> &ResourceCore {
        &self.core
    }
}

impl_handle_identity!(Window);
